//! Schedule orchestration.
//!
//! Composes the policy functions with the external collaborators into the
//! two public operations: single-date lookup and bounded date-range lookup.
//! Every operation is a stateless transformation pipeline over its inputs;
//! the only stateful element is the TTL cache.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::api::{Coordinate, ScheduleRequest};
use crate::config::ScheduleConfig;
use crate::engine::{
    AstronomicalEngine, Clock, LocationResolver, LunarCalendarConverter, RawPrayerTimes,
    ResolvedLocation, SystemClock,
};
use crate::error::ScheduleError;
use crate::models::{DisclosureTier, Prayer, PrayerTimeEntry, Schedule};
use crate::policy::{fasting_offset, high_latitude, horizon, precision};
use crate::services::cache::{CacheKey, ResultCache};
use crate::services::estimator::EventEstimator;

/// Maximum number of days a range request may span.
pub const MAX_RANGE_DAYS: i64 = 90;

/// Orchestrates schedule computation, policy enforcement, and caching.
pub struct ScheduleOrchestrator {
    resolver: Arc<dyn LocationResolver>,
    engine: Arc<dyn AstronomicalEngine>,
    calendar: Arc<dyn LunarCalendarConverter>,
    clock: Arc<dyn Clock>,
    config: ScheduleConfig,
    cache: ResultCache,
}

impl ScheduleOrchestrator {
    /// Build an orchestrator on the system clock.
    pub fn new(
        resolver: Arc<dyn LocationResolver>,
        engine: Arc<dyn AstronomicalEngine>,
        calendar: Arc<dyn LunarCalendarConverter>,
        config: ScheduleConfig,
    ) -> Self {
        Self::with_clock(resolver, engine, calendar, config, Arc::new(SystemClock))
    }

    /// Build an orchestrator with an explicit clock.
    pub fn with_clock(
        resolver: Arc<dyn LocationResolver>,
        engine: Arc<dyn AstronomicalEngine>,
        calendar: Arc<dyn LunarCalendarConverter>,
        config: ScheduleConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            engine,
            calendar,
            clock,
            config,
            cache: ResultCache::new(),
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Classify a requested date against today and the configured ceiling.
    pub fn classify(&self, date: NaiveDate) -> Result<DisclosureTier, ScheduleError> {
        horizon::classify(date, self.clock.today(), self.config.lookahead_ceiling_months)
    }

    /// Whether a coordinate lies beyond the reliable-latitude band.
    pub fn is_high_latitude(&self, coordinate: &Coordinate) -> bool {
        high_latitude::is_high_latitude(coordinate.latitude)
    }

    /// Event estimator sharing this orchestrator's calendar and clock.
    pub fn events(&self) -> EventEstimator {
        EventEstimator::new(Arc::clone(&self.calendar), Arc::clone(&self.clock))
    }

    /// Compute the prayer schedule for one date.
    ///
    /// Pipeline: classify, resolve location, consult the cache, compute the
    /// five raw instants, convert the lunar date, apply the fasting-month
    /// offset, flag high latitude, select precision, assemble and cache.
    ///
    /// # Errors
    /// * [`ScheduleError::LookaheadExceeded`] for dates beyond the ceiling
    /// * [`ScheduleError::PermissionDenied`] / [`ScheduleError::LocationUnavailable`]
    ///   from the location collaborator
    /// * [`ScheduleError::CalculationFailed`] from the astronomical engine,
    ///   or when it returns a non-increasing sequence
    pub async fn get_schedule(
        &self,
        date: NaiveDate,
        hint: Option<&Coordinate>,
    ) -> Result<Schedule, ScheduleError> {
        let tier = self.classify(date)?;
        let location = self.resolver.resolve(hint).await?;
        self.schedule_for_day(date, tier, &location).await
    }

    /// Compute schedules for every day in `[start, end]`, both endpoints
    /// inclusive. The location is resolved once per call; the cache is
    /// consulted per day before recomputing.
    ///
    /// # Errors
    /// * [`ScheduleError::InvalidDate`] when `end` precedes `start`
    /// * [`ScheduleError::DateRangeTooLarge`] when the span exceeds 90 days
    /// * any per-day failure, propagated unchanged
    pub async fn get_schedule_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        hint: Option<&Coordinate>,
    ) -> Result<Vec<Schedule>, ScheduleError> {
        if end < start {
            return Err(ScheduleError::InvalidDate(format!(
                "range end {} precedes start {}",
                end, start
            )));
        }
        let requested_days = (end - start).num_days();
        if requested_days > MAX_RANGE_DAYS {
            return Err(ScheduleError::DateRangeTooLarge {
                requested_days,
                max_days: MAX_RANGE_DAYS,
            });
        }

        let location = self.resolver.resolve(hint).await?;
        let mut results = Vec::with_capacity(requested_days as usize + 1);
        for date in start.iter_days().take(requested_days as usize + 1) {
            let tier = self.classify(date)?;
            results.push(self.schedule_for_day(date, tier, &location).await?);
        }
        info!(
            "computed {}-day schedule range starting {}",
            results.len(),
            start
        );
        Ok(results)
    }

    async fn schedule_for_day(
        &self,
        date: NaiveDate,
        tier: DisclosureTier,
        location: &ResolvedLocation,
    ) -> Result<Schedule, ScheduleError> {
        let key = CacheKey::new(date, &location.coordinate, &self.config);
        if let Some(hit) = self.cache.get(&key, self.clock.now()) {
            debug!("cache hit for {} ({})", date, key.fingerprint());
            return Ok(hit);
        }

        let request = ScheduleRequest::new(
            date,
            location.coordinate,
            self.config.method,
            self.config.madhab,
        );
        let raw = self.engine.compute(&request).await?;
        validate_sequence(&raw)?;

        let hijri_date = self.calendar.to_hijri(date)?;
        let is_fasting_month = self.calendar.is_fasting_month(date)?;

        let entries: Vec<PrayerTimeEntry> = Prayer::ALL
            .iter()
            .zip(raw.iter())
            .map(|(prayer, time)| PrayerTimeEntry::new(*prayer, *time))
            .collect();
        let prayer_times = fasting_offset::apply(
            entries,
            is_fasting_month,
            self.config.method,
            self.config.fasting_offset_enabled,
        );

        let is_high_latitude = high_latitude::is_high_latitude(location.coordinate.latitude);
        if is_high_latitude {
            warn!(
                "latitude {:.4} is beyond the reliable band; times for {} are flagged",
                location.coordinate.latitude, date
            );
        }

        let result = Schedule {
            date,
            prayer_times,
            hijri_date,
            is_fasting_month,
            tier,
            timezone: location.timezone.clone(),
            is_high_latitude,
            precision: precision::select(tier, self.config.allow_long_range_exact),
        };
        self.cache.insert(&key, result.clone(), self.clock.now());
        Ok(result)
    }
}

/// Reject engine output that violates the schedule invariant.
fn validate_sequence(raw: &RawPrayerTimes) -> Result<(), ScheduleError> {
    if raw.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ScheduleError::CalculationFailed(
            "engine returned a non-increasing prayer time sequence".to_string(),
        ));
    }
    Ok(())
}

//! Shared mock collaborators for integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use parking_lot::RwLock;

use miqat::api::{Coordinate, ScheduleRequest};
use miqat::engine::{
    AstronomicalEngine, Clock, LocationResolver, LunarCalendarConverter, RawPrayerTimes,
    ResolvedLocation,
};
use miqat::error::ScheduleError;
use miqat::models::HijriDate;

/// Clock pinned to a fixed instant, advanceable from tests.
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: RwLock::new(now),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.write() += by;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.read().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}

/// Resolver that always returns one location, or always fails.
pub struct StaticResolver {
    outcome: Result<ResolvedLocation, ScheduleError>,
}

impl StaticResolver {
    pub fn at(coordinate: Coordinate, timezone: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(ResolvedLocation {
                coordinate,
                timezone: timezone.to_string(),
            }),
        })
    }

    pub fn failing(error: ScheduleError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
        })
    }
}

#[async_trait]
impl LocationResolver for StaticResolver {
    async fn resolve(&self, hint: Option<&Coordinate>) -> Result<ResolvedLocation, ScheduleError> {
        let mut resolved = self.outcome.clone()?;
        if let Some(coordinate) = hint {
            resolved.coordinate = *coordinate;
        }
        Ok(resolved)
    }
}

/// Deterministic engine producing a plausible five-instant day, counting
/// every invocation.
pub struct CountingEngine {
    calls: AtomicUsize,
}

impl CountingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The unadjusted instants this engine produces for a date.
    pub fn raw_times(date: NaiveDate) -> RawPrayerTimes {
        let minutes = [5 * 60, 12 * 60 + 10, 15 * 60 + 30, 18 * 60 + 45, 20 * 60 + 15];
        minutes.map(|m| {
            date.and_hms_opt(0, 0, 0)
                .expect("midnight always resolves")
                .and_utc()
                + Duration::minutes(m)
        })
    }
}

#[async_trait]
impl AstronomicalEngine for CountingEngine {
    async fn compute(&self, request: &ScheduleRequest) -> Result<RawPrayerTimes, ScheduleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::raw_times(request.date))
    }
}

/// Engine whose output violates the strictly-increasing invariant.
pub struct BrokenEngine;

#[async_trait]
impl AstronomicalEngine for BrokenEngine {
    async fn compute(&self, request: &ScheduleRequest) -> Result<RawPrayerTimes, ScheduleError> {
        let mut raw = CountingEngine::raw_times(request.date);
        raw[3] = raw[1];
        Ok(raw)
    }
}

/// Arithmetic lunar calendar anchored at 1 Muharram 1447 = 2025-06-26.
///
/// Odd months have 30 days, even months 29, every year 354 days. Real
/// conversion is a sighting-dependent external concern; this tabular rule is
/// deterministic and round-trip consistent, which is all the tests need.
pub struct ArithmeticHijriCalendar;

const ANCHOR_HIJRI_YEAR: i32 = 1447;
const HIJRI_YEAR_DAYS: i64 = 354;

impl ArithmeticHijriCalendar {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 26).expect("anchor date is valid")
    }

    fn month_len(month: u32) -> i64 {
        if month % 2 == 1 {
            30
        } else {
            29
        }
    }
}

impl LunarCalendarConverter for ArithmeticHijriCalendar {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, ScheduleError> {
        let delta = (date - Self::anchor()).num_days();
        let year_index = delta.div_euclid(HIJRI_YEAR_DAYS);
        let mut remaining = delta.rem_euclid(HIJRI_YEAR_DAYS);
        let mut month = 1;
        while remaining >= Self::month_len(month) {
            remaining -= Self::month_len(month);
            month += 1;
        }
        Ok(HijriDate::new(
            ANCHOR_HIJRI_YEAR + year_index as i32,
            month,
            remaining as u32 + 1,
        ))
    }

    fn to_gregorian(&self, hijri: HijriDate) -> Result<NaiveDate, ScheduleError> {
        if hijri.month == 0 || hijri.month > 12 || hijri.day == 0 || hijri.day > 30 {
            return Err(ScheduleError::InvalidDate(format!(
                "unresolvable lunar components: month {} day {}",
                hijri.month, hijri.day
            )));
        }
        let mut days = i64::from(hijri.year - ANCHOR_HIJRI_YEAR) * HIJRI_YEAR_DAYS;
        for month in 1..hijri.month {
            days += Self::month_len(month);
        }
        days += i64::from(hijri.day) - 1;
        Ok(Self::anchor() + Duration::days(days))
    }
}

/// Add whole calendar months to a date, keeping the day-of-month.
/// Test dates use days that exist in every month.
pub fn plus_months(date: NaiveDate, months: i32) -> NaiveDate {
    use chrono::Datelike;
    let total = date.year() * 12 + date.month() as i32 - 1 + months;
    NaiveDate::from_ymd_opt(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, date.day())
        .expect("day exists in target month")
}

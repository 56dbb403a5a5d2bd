//! Collaborator interfaces consumed by the orchestration layer.
//!
//! The astronomical computation, lunar calendar conversion, device location,
//! and wall clock are all external concerns; this crate depends on them only
//! through these traits. Implementations must be `Send + Sync` to work with
//! async Rust.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::api::{Coordinate, ScheduleRequest};
use crate::error::ScheduleError;
use crate::models::{HijriDate, RAMADAN};

/// The five raw prayer instants for one date, in canonical order
/// (Fajr, Dhuhr, Asr, Maghrib, Isha).
pub type RawPrayerTimes = [DateTime<Utc>; 5];

/// A coordinate together with the IANA time zone governing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    /// IANA zone identifier, e.g. "Europe/Oslo". Resolved fresh so current
    /// zone rules apply; never a cached offset.
    pub timezone: String,
}

/// Resolves the caller's location, optionally guided by a hint.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolve a location.
    ///
    /// # Errors
    /// * [`ScheduleError::PermissionDenied`] when the platform refuses access
    /// * [`ScheduleError::LocationUnavailable`] when no fix can be produced
    async fn resolve(&self, hint: Option<&Coordinate>) -> Result<ResolvedLocation, ScheduleError>;
}

/// Computes the five raw prayer instants for a request.
///
/// Treated as a black box: its internal high-latitude fallback behavior is
/// out of scope here, and only its output is inspected downstream.
#[async_trait]
pub trait AstronomicalEngine: Send + Sync {
    /// # Errors
    /// * [`ScheduleError::CalculationFailed`] when no solution exists
    async fn compute(&self, request: &ScheduleRequest) -> Result<RawPrayerTimes, ScheduleError>;
}

/// Gregorian to lunar calendar conversion.
pub trait LunarCalendarConverter: Send + Sync {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, ScheduleError>;

    fn to_gregorian(&self, hijri: HijriDate) -> Result<NaiveDate, ScheduleError>;

    /// Whether `date` falls within the fasting month.
    fn is_fasting_month(&self, date: NaiveDate) -> Result<bool, ScheduleError> {
        Ok(self.to_hijri(date)?.month == RAMADAN)
    }
}

/// Source of the current date and instant.
///
/// Injected rather than read ambiently so tests can pin "today" and exercise
/// tier boundaries and cache expiry deterministically.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

//! Public type surface for the crate.
//!
//! Consolidates the request-side value types and re-exports the result-side
//! models, so callers can depend on `miqat::api` alone.

pub use crate::config::ScheduleConfig;
pub use crate::error::ScheduleError;
pub use crate::models::{
    CalculationMethod, ConfidenceBand, DateInterval, DisclosureTier, EventEstimate, EventKind,
    HijriDate, Madhab, Prayer, PrayerTimeEntry, PrecisionMode, Schedule, EVENT_DISCLOSURE,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic coordinate (latitude, longitude).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// One schedule computation request. Transient; created per call and handed
/// to the astronomical engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub date: NaiveDate,
    pub coordinate: Coordinate,
    pub method: CalculationMethod,
    pub madhab: Madhab,
}

impl ScheduleRequest {
    pub fn new(
        date: NaiveDate,
        coordinate: Coordinate,
        method: CalculationMethod,
        madhab: Madhab,
    ) -> Self {
        Self {
            date,
            coordinate,
            method,
            madhab,
        }
    }
}

//! Estimated recurring calendar events and their confidence bands.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::hijri::HijriDate;

/// Fixed planning-only disclosure attached to every event estimate.
/// Carried verbatim; callers must not alter it.
pub const EVENT_DISCLOSURE: &str =
    "Estimated date for planning only. Actual observance depends on local moon sighting.";

/// The recurring events this crate estimates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    RamadanStart,
    RamadanEnd,
    EidAlFitr,
    EidAlAdha,
    Other(String),
}

impl EventKind {
    pub fn name(&self) -> &str {
        match self {
            EventKind::RamadanStart => "Start of Ramadan",
            EventKind::RamadanEnd => "End of Ramadan",
            EventKind::EidAlFitr => "Eid al-Fitr",
            EventKind::EidAlAdha => "Eid al-Adha",
            EventKind::Other(name) => name,
        }
    }
}

/// Confidence in an estimated date, reusing the lookahead tier thresholds:
/// within 12 months is high, 13 to 60 months is medium, beyond is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

/// An estimated occurrence of a recurring event.
///
/// The Gregorian date is an estimate with a documented one-day uncertainty
/// versus local sighting-based authorities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEstimate {
    pub kind: EventKind,
    pub date: NaiveDate,
    pub hijri_date: HijriDate,
    pub confidence: ConfidenceBand,
    /// Always [`EVENT_DISCLOSURE`], byte for byte.
    pub disclosure: String,
}

/// A closed interval of Gregorian calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered, endpoints inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

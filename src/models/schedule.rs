//! The assembled daily schedule value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::hijri::HijriDate;
use super::horizon::{DisclosureTier, PrecisionMode};
use super::prayer::PrayerTimeEntry;

/// A fully assembled prayer schedule for one civil date.
///
/// Immutable once produced by the orchestrator. `prayer_times` always holds
/// exactly five entries in canonical order with strictly increasing times;
/// the orchestrator rejects engine output that violates this before a result
/// is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// The civil date the schedule was computed for.
    pub date: NaiveDate,
    /// The five prayer times in canonical order.
    pub prayer_times: Vec<PrayerTimeEntry>,
    /// The corresponding lunar calendar date.
    pub hijri_date: HijriDate,
    /// Whether `date` falls within the fasting month.
    pub is_fasting_month: bool,
    /// How far ahead the request was, in disclosure bands.
    pub tier: DisclosureTier,
    /// IANA identifier of the time zone the computation used. Zone rules are
    /// re-resolved on every computation; offsets are never cached.
    pub timezone: String,
    /// Whether the location lies beyond the reliable-latitude band.
    pub is_high_latitude: bool,
    /// How loosely the times should be displayed.
    pub precision: PrecisionMode,
}

impl Schedule {
    /// Whether the entry sequence satisfies the schedule invariant:
    /// exactly five entries, strictly increasing in time.
    pub fn has_valid_sequence(&self) -> bool {
        self.prayer_times.len() == 5
            && self
                .prayer_times
                .windows(2)
                .all(|pair| pair[0].time < pair[1].time)
    }
}

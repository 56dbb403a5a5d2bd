//! Fasting-month adjustment of the night prayer.
//!
//! Methods that define Isha as a fixed interval after sunset widen that
//! interval during the fasting month. The adjustment shifts the already
//! computed instant; it never recomputes the underlying astronomical time.

use chrono::Duration;

use crate::models::{CalculationMethod, Prayer, PrayerTimeEntry};

/// Additional minutes added to the night prayer during the fasting month.
pub const FASTING_ISHA_OFFSET_MINUTES: i64 = 30;

/// Apply the fasting-month Isha offset.
///
/// The offset applies only when the date is in the fasting month, the user
/// has the adjustment enabled, and the method defines Isha as a fixed
/// post-sunset interval. Exactly the Isha entry shifts by 30 minutes and has
/// its marker set; every other entry passes through unchanged. Pure and
/// idempotent for identical inputs.
pub fn apply(
    entries: Vec<PrayerTimeEntry>,
    is_fasting_month: bool,
    method: CalculationMethod,
    user_enabled: bool,
) -> Vec<PrayerTimeEntry> {
    if !(is_fasting_month && user_enabled && method.uses_fixed_isha_interval()) {
        return entries;
    }
    entries
        .into_iter()
        .map(|entry| {
            if entry.prayer == Prayer::Isha {
                PrayerTimeEntry {
                    prayer: entry.prayer,
                    time: entry.time + Duration::minutes(FASTING_ISHA_OFFSET_MINUTES),
                    offset_adjusted: true,
                }
            } else {
                entry
            }
        })
        .collect()
}

//! Time-horizon classification.
//!
//! One whole-month delta computation backs both the disclosure tier and the
//! event-confidence band, so the thresholds cannot drift apart.

use chrono::{Datelike, NaiveDate};

use crate::error::ScheduleError;
use crate::models::{ConfidenceBand, DisclosureTier};

/// Upper bound of the short-term band, in whole months.
pub const SHORT_TERM_MAX_MONTHS: i32 = 12;
/// Upper bound of the medium-term band, in whole months.
pub const MEDIUM_TERM_MAX_MONTHS: i32 = 60;

/// Whole-calendar-month difference from `from` to `to`.
///
/// A month counts once the day-of-month is reached: 2026-01-15 to 2026-02-14
/// is 0 whole months, to 2026-02-15 is 1. This is a calendar delta, not
/// elapsed days divided by thirty. Negative when `to` precedes `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

/// Classify how far ahead `requested` lies relative to `today`.
///
/// Same calendar day maps to [`DisclosureTier::Today`] regardless of time of
/// day. Dates before today clamp to a zero-month delta. Fails with
/// [`ScheduleError::LookaheadExceeded`] when the whole-month delta is beyond
/// `ceiling_months`; the ceiling is enforced, never silently clamped.
pub fn classify(
    requested: NaiveDate,
    today: NaiveDate,
    ceiling_months: u32,
) -> Result<DisclosureTier, ScheduleError> {
    let months = whole_months_between(today, requested).max(0);
    if months > ceiling_months as i32 {
        return Err(ScheduleError::LookaheadExceeded {
            requested_months: months,
            ceiling_months,
        });
    }
    if requested == today {
        return Ok(DisclosureTier::Today);
    }
    Ok(if months <= SHORT_TERM_MAX_MONTHS {
        DisclosureTier::ShortTerm
    } else if months <= MEDIUM_TERM_MAX_MONTHS {
        DisclosureTier::MediumTerm
    } else {
        DisclosureTier::LongTerm
    })
}

/// Confidence band for an estimated date, on the same month thresholds as
/// the disclosure tiers. Total; never fails, even beyond the ceiling.
pub fn confidence_band(date: NaiveDate, today: NaiveDate) -> ConfidenceBand {
    let months = whole_months_between(today, date).max(0);
    if months <= SHORT_TERM_MAX_MONTHS {
        ConfidenceBand::High
    } else if months <= MEDIUM_TERM_MAX_MONTHS {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}

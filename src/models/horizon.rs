//! Disclosure tiers and display precision modes.
//!
//! Each tier carries a fixed user-facing message that must be shown verbatim.
//! Callers must never paraphrase or regenerate these strings.

use serde::{Deserialize, Serialize};

/// How far in the future a requested date lies, in coarse bands.
///
/// The tier drives which fixed warning text is shown and how loosely the
/// computed times are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureTier {
    /// The requested date is today, regardless of time of day.
    Today,
    /// 1 to 12 whole months ahead.
    ShortTerm,
    /// 13 to 60 whole months ahead.
    MediumTerm,
    /// More than 60 whole months ahead, up to the configured ceiling.
    LongTerm,
}

impl DisclosureTier {
    /// The fixed user-facing message for this tier. Shown verbatim.
    pub fn message(&self) -> &'static str {
        match self {
            DisclosureTier::Today => {
                "Times shown are computed for today using current time zone rules."
            }
            DisclosureTier::ShortTerm => {
                "Times are computed for a future date. Verify with your local mosque as the date approaches."
            }
            DisclosureTier::MediumTerm => {
                "Times are long-range projections and may shift if time zone or daylight saving rules change."
            }
            DisclosureTier::LongTerm => {
                "Times this far ahead are approximate projections. Treat them as planning guidance only."
            }
        }
    }

    /// Whether the caller should surface a disclosure banner. Only same-day
    /// schedules are shown without one.
    pub fn requires_banner(&self) -> bool {
        !matches!(self, DisclosureTier::Today)
    }
}

/// How loosely a computed instant is displayed, reflecting growing
/// uncertainty at longer horizons.
///
/// `Coarse` is part of the display vocabulary but the current selection
/// table only produces `Exact` and `Window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum PrecisionMode {
    /// Show the computed instant as-is.
    Exact,
    /// Show a symmetric range of the given total width, centered on the
    /// computed instant.
    Window { minutes: u32 },
    /// Show only a named part of the day.
    Coarse,
}

impl PrecisionMode {
    /// The display bounds for an instant under this mode: a symmetric
    /// window for `Window`, the instant itself otherwise.
    pub fn display_bounds(
        &self,
        instant: chrono::DateTime<chrono::Utc>,
    ) -> (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) {
        match self {
            PrecisionMode::Window { minutes } => {
                let half = chrono::Duration::minutes(i64::from(*minutes) / 2);
                (instant - half, instant + half)
            }
            _ => (instant, instant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_only_today_skips_banner() {
        assert!(!DisclosureTier::Today.requires_banner());
        assert!(DisclosureTier::ShortTerm.requires_banner());
        assert!(DisclosureTier::MediumTerm.requires_banner());
        assert!(DisclosureTier::LongTerm.requires_banner());
    }

    #[test]
    fn test_messages_are_distinct_and_nonempty() {
        let tiers = [
            DisclosureTier::Today,
            DisclosureTier::ShortTerm,
            DisclosureTier::MediumTerm,
            DisclosureTier::LongTerm,
        ];
        for (i, a) in tiers.iter().enumerate() {
            assert!(!a.message().is_empty());
            for b in tiers.iter().skip(i + 1) {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_window_bounds_are_symmetric() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 1, 19, 0, 0).unwrap();
        let (lo, hi) = PrecisionMode::Window { minutes: 30 }.display_bounds(instant);
        assert_eq!(instant - lo, hi - instant);
        assert_eq!(hi - lo, chrono::Duration::minutes(30));
    }

    #[test]
    fn test_exact_bounds_collapse_to_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 1, 19, 0, 0).unwrap();
        let (lo, hi) = PrecisionMode::Exact.display_bounds(instant);
        assert_eq!(lo, instant);
        assert_eq!(hi, instant);
    }
}

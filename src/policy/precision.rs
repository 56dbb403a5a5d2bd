//! Display precision selection.

use crate::models::{DisclosureTier, PrecisionMode};

/// Total width of the display window at degraded precision, in minutes.
pub const WINDOW_WIDTH_MINUTES: u32 = 30;

/// Pick the display precision for a disclosure tier.
///
/// Pure lookup table. `allow_long_range_exact` only affects the medium-term
/// band; long-term requests are always windowed.
pub fn select(tier: DisclosureTier, allow_long_range_exact: bool) -> PrecisionMode {
    match tier {
        DisclosureTier::Today | DisclosureTier::ShortTerm => PrecisionMode::Exact,
        DisclosureTier::MediumTerm => {
            if allow_long_range_exact {
                PrecisionMode::Exact
            } else {
                PrecisionMode::Window {
                    minutes: WINDOW_WIDTH_MINUTES,
                }
            }
        }
        DisclosureTier::LongTerm => PrecisionMode::Window {
            minutes: WINDOW_WIDTH_MINUTES,
        },
    }
}

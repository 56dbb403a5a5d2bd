//! Immutable value types shared across the crate.

pub mod events;
pub mod hijri;
pub mod horizon;
pub mod prayer;
pub mod schedule;

pub use events::{ConfidenceBand, DateInterval, EventEstimate, EventKind, EVENT_DISCLOSURE};
pub use hijri::{HijriDate, DHU_AL_HIJJAH, RAMADAN, SHAWWAL};
pub use horizon::{DisclosureTier, PrecisionMode};
pub use prayer::{CalculationMethod, Madhab, Prayer, PrayerTimeEntry};
pub use schedule::Schedule;

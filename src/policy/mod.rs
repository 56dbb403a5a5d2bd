//! Pure policy functions.
//!
//! Everything in this module is synchronous, deterministic, and safe to call
//! from any thread without synchronization. The orchestrator composes these
//! rules; none of them performs I/O or reads ambient state.

pub mod fasting_offset;
pub mod high_latitude;
pub mod horizon;
pub mod precision;

pub use fasting_offset::FASTING_ISHA_OFFSET_MINUTES;
pub use high_latitude::{is_high_latitude, HIGH_LATITUDE_THRESHOLD_DEG};
pub use horizon::{classify, confidence_band, whole_months_between};
pub use precision::WINDOW_WIDTH_MINUTES;

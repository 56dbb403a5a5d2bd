//! Error types for schedule computation and policy enforcement.
//!
//! All failures surface synchronously to the immediate caller; this crate
//! performs no internal retries and never substitutes a fallback value for a
//! failed computation.

/// Error type for all schedule operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// The requested date lies further ahead than the configured ceiling
    /// allows. The caller must pick a nearer date or raise the ceiling.
    #[error(
        "requested date is {requested_months} months ahead, beyond the {ceiling_months}-month lookahead ceiling"
    )]
    LookaheadExceeded {
        requested_months: i32,
        ceiling_months: u32,
    },

    /// A range request covered more days than the fixed maximum.
    #[error("requested range spans {requested_days} days, beyond the {max_days}-day maximum")]
    DateRangeTooLarge {
        requested_days: i64,
        max_days: i64,
    },

    /// The location collaborator was denied permission by the platform.
    /// Retryable after the user grants access.
    #[error("location permission denied")]
    PermissionDenied,

    /// The location collaborator could not produce a coordinate.
    /// Retryable.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// The astronomical engine failed to produce the five prayer instants.
    /// Retryable; the message is not assumed stable.
    #[error("prayer time calculation failed: {0}")]
    CalculationFailed(String),

    /// Malformed date input, e.g. unresolvable calendar components.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl ScheduleError {
    /// Whether the caller may meaningfully retry the same request.
    ///
    /// Lookahead and range violations are deterministic and will fail again
    /// unchanged; collaborator failures may clear on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied | Self::LocationUnavailable(_) | Self::CalculationFailed(_)
        )
    }
}

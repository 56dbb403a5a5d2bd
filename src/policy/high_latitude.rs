//! High-latitude detection.
//!
//! Beyond roughly 55 degrees of latitude the standard twilight-angle methods
//! become numerically unreliable (twilight can persist all night in summer).
//! Results there are flagged so callers can surface the caveat.

/// Absolute latitude above which calculation reliability degrades, in
/// degrees. The boundary value itself is not high-latitude.
pub const HIGH_LATITUDE_THRESHOLD_DEG: f64 = 55.0;

/// Whether a latitude lies beyond the reliable band. Total; never fails.
pub fn is_high_latitude(latitude: f64) -> bool {
    latitude.abs() > HIGH_LATITUDE_THRESHOLD_DEG
}

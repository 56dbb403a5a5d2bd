//! Service layer: orchestration, event estimation, and the result cache.
//!
//! Services compose the pure policy functions with the external
//! collaborators and own the single piece of mutable state, the TTL cache.

pub mod cache;
pub mod estimator;
pub mod orchestrator;

pub use cache::{CacheKey, ResultCache, CACHE_TTL_DAYS};
pub use estimator::{EventEstimator, RAMADAN_SPAN_DAYS};
pub use orchestrator::{ScheduleOrchestrator, MAX_RANGE_DAYS};

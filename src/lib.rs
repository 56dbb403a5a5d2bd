//! # Miqat
//!
//! Prayer schedule computation core with lookahead disclosure policies.
//!
//! This crate computes daily prayer schedules for arbitrary future dates and
//! estimates recurring calendar events (Ramadan and the two Eid festivals),
//! while enforcing the accuracy and disclosure rules that long-range
//! projections require: lookahead validation against a configurable ceiling,
//! precision degradation as the horizon grows, high-latitude flagging, a
//! conditional fasting-month adjustment of the night prayer, and a
//! time-bounded result cache for batched date ranges.
//!
//! The astronomical computation, lunar calendar conversion, and device
//! location are external collaborators consumed through the traits in
//! [`engine`]; this crate is the orchestration and policy layer above them.
//!
//! ## Architecture
//!
//! - [`api`]: public request/result type surface
//! - [`models`]: immutable value types (prayers, schedules, tiers, events)
//! - [`policy`]: the pure policy functions (classification, precision,
//!   high latitude, fasting-month offset)
//! - [`services`]: the orchestrator, event estimator, and TTL cache
//! - [`engine`]: collaborator traits and the system clock
//! - [`config`]: explicit configuration passed in at construction

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod policy;
pub mod services;

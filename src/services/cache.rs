//! Time-bounded in-memory cache for computed schedules.
//!
//! Entries live for a fixed seven days. The key covers every input that
//! affects the computed value, including the policy toggles, so a result is
//! never served to a configuration other than the one that produced it.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::Coordinate;
use crate::config::ScheduleConfig;
use crate::models::{CalculationMethod, Madhab, Schedule};

/// Fixed lifetime of a cache entry, in days.
pub const CACHE_TTL_DAYS: i64 = 7;

/// Coordinate rounding factor for cache identity: four decimal places,
/// about eleven meters of latitude.
const COORDINATE_SCALE: f64 = 10_000.0;

/// Identity of one cached computation.
///
/// Coordinates are rounded to a fixed precision so jitter in a device fix
/// does not defeat the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub date: NaiveDate,
    /// Latitude scaled by 1e4 and rounded.
    pub lat_e4: i64,
    /// Longitude scaled by 1e4 and rounded.
    pub lon_e4: i64,
    pub method: CalculationMethod,
    pub madhab: Madhab,
    pub fasting_offset_enabled: bool,
    pub allow_long_range_exact: bool,
}

impl CacheKey {
    pub fn new(date: NaiveDate, coordinate: &Coordinate, config: &ScheduleConfig) -> Self {
        Self {
            date,
            lat_e4: (coordinate.latitude * COORDINATE_SCALE).round() as i64,
            lon_e4: (coordinate.longitude * COORDINATE_SCALE).round() as i64,
            method: config.method,
            madhab: config.madhab,
            fasting_offset_enabled: config.fasting_offset_enabled,
            allow_long_range_exact: config.allow_long_range_exact,
        }
    }

    /// SHA-256 fingerprint of the canonical key JSON. Used as the map key
    /// and in log lines.
    pub fn fingerprint(&self) -> String {
        let canonical =
            serde_json::to_string(self).expect("cache key serialization cannot fail");
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: Schedule,
    inserted_at: DateTime<Utc>,
}

/// Concurrent TTL cache mapping [`CacheKey`] fingerprints to schedules.
///
/// Reads and inserts are safe from any thread. An entry whose age exceeds
/// the TTL is never returned.
#[derive(Clone)]
pub struct ResultCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::days(CACHE_TTL_DAYS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Look up a fresh entry. Expired entries are treated as absent.
    pub fn get(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<Schedule> {
        let entries = self.entries.read();
        let entry = entries.get(&key.fingerprint())?;
        if now - entry.inserted_at > self.ttl {
            return None;
        }
        Some(entry.result.clone())
    }

    /// Store a freshly computed schedule, replacing any previous entry.
    pub fn insert(&self, key: &CacheKey, result: Schedule, now: DateTime<Utc>) {
        self.entries.write().insert(
            key.fingerprint(),
            CacheEntry {
                result,
                inserted_at: now,
            },
        );
    }

    /// Drop every expired entry and return how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| now - entry.inserted_at <= self.ttl);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

//! Schedule configuration.
//!
//! An explicit value handed to the orchestrator at construction. Behavior is
//! fully determined by inputs; nothing is read from ambient global state at
//! call time.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ScheduleError;
use crate::models::{CalculationMethod, Madhab};

fn default_lookahead_ceiling_months() -> u32 {
    60
}

fn default_fasting_offset_enabled() -> bool {
    true
}

/// Configuration for schedule computation and disclosure policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Maximum lookahead in whole months before requests are rejected.
    #[serde(default = "default_lookahead_ceiling_months")]
    pub lookahead_ceiling_months: u32,
    /// Whether the fasting-month Isha offset is applied for eligible methods.
    #[serde(default = "default_fasting_offset_enabled")]
    pub fasting_offset_enabled: bool,
    /// Whether medium-term results may keep exact precision.
    #[serde(default)]
    pub allow_long_range_exact: bool,
    /// Selected astronomical parameter set.
    #[serde(default)]
    pub method: CalculationMethod,
    /// Selected jurisprudence school.
    #[serde(default)]
    pub madhab: Madhab,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lookahead_ceiling_months: default_lookahead_ceiling_months(),
            fasting_offset_enabled: default_fasting_offset_enabled(),
            allow_long_range_exact: false,
            method: CalculationMethod::default(),
            madhab: Madhab::default(),
        }
    }
}

impl ScheduleConfig {
    /// Load configuration from a TOML file. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`ScheduleError::ConfigurationError`] if the file cannot be
    /// read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScheduleError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ScheduleError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }
}

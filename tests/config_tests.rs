//! Configuration file loading tests.

use std::io::Write;

use miqat::api::ScheduleConfig;
use miqat::error::ScheduleError;
use miqat::models::{CalculationMethod, Madhab};

#[test]
fn test_load_full_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
lookahead_ceiling_months = 72
fasting_offset_enabled = false
allow_long_range_exact = true
method = "umm_al_qura"
madhab = "hanafi"
"#
    )
    .unwrap();

    let config = ScheduleConfig::from_file(file.path()).unwrap();
    assert_eq!(config.lookahead_ceiling_months, 72);
    assert!(!config.fasting_offset_enabled);
    assert!(config.allow_long_range_exact);
    assert_eq!(config.method, CalculationMethod::UmmAlQura);
    assert_eq!(config.madhab, Madhab::Hanafi);
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = ScheduleConfig::from_file(file.path()).unwrap();
    assert_eq!(config, ScheduleConfig::default());
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let err = ScheduleConfig::from_file("/nonexistent/miqat.toml").unwrap_err();
    assert!(matches!(err, ScheduleError::ConfigurationError(_)));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "lookahead_ceiling_months = \"many\"").unwrap();
    let err = ScheduleConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ScheduleError::ConfigurationError(_)));
}

/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use screenwright::app_config::{AnalysisConfig, Config, LogLevel};
use screenwright::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.layout.center_width, 40);
    assert_eq!(config.layout.paren_indent, 10);
    assert_eq!(config.layout.dialogue_indent, 5);
    assert_eq!(config.layout.transition_column, 60);

    assert_eq!(config.analysis.long_line_chars, 100);
    assert_eq!(config.analysis.dense_block_lines, 5);
    assert_eq!(config.analysis.web_max_scene_lines, 15);
    assert_eq!(config.analysis.pacing_variation_threshold, 4);
    assert_eq!(config.analysis.balance_factor, 2);
    assert!((config.analysis.stage_min_dialogue_ratio - 0.3).abs() < f64::EPSILON);
    assert!((config.analysis.words_per_second - 2.5).abs() < f64::EPSILON);

    assert!(config.format_on_load);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Zero center width
    config.layout.center_width = 0;
    assert!(config.validate().is_err());
    config.layout.center_width = 40;

    // Indent wider than the centering width
    config.layout.paren_indent = 40;
    assert!(config.validate().is_err());
    config.layout.paren_indent = 10;

    // Ratio outside [0, 1]
    config.analysis.stage_min_dialogue_ratio = 1.5;
    assert!(config.validate().is_err());
    config.analysis.stage_min_dialogue_ratio = 0.3;

    // Non-positive speaking rate
    config.analysis.words_per_second = 0.0;
    assert!(config.validate().is_err());
    config.analysis.words_per_second = 2.5;

    assert!(config.validate().is_ok());
}

/// Test that validation errors name the offending field
#[test]
fn test_config_validation_withBadRatio_shouldReturnConfigError() {
    let config = Config {
        analysis: AnalysisConfig {
            stage_min_dialogue_ratio: -0.1,
            ..AnalysisConfig::default()
        },
        ..Config::default()
    };

    let error = config.validate().unwrap_err();
    match error.downcast_ref::<ConfigError>() {
        Some(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "analysis.stage_min_dialogue_ratio");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Test partial JSON falling back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let json = r#"{ "layout": { "center_width": 60 }, "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.layout.center_width, 60);
    assert_eq!(config.layout.paren_indent, 10);
    assert_eq!(config.analysis, AnalysisConfig::default());
    assert!(config.format_on_load);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test saving and loading a configuration file
#[test]
fn test_config_saveAndLoad_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.format_on_load = false;
    config.analysis.words_per_second = 3.0;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

/// Test loading a malformed configuration file
#[test]
fn test_config_fromFile_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    assert!(Config::from_file(temp_dir.path().join("missing.json")).is_err());
    Ok(())
}

/// Test the log level mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
}

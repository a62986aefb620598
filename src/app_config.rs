use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::screenplay::LayoutConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Layout widths and indents
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Report thresholds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Whether loaded scripts are reformatted before analysis
    #[serde(default = "default_true")]
    pub format_on_load: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Thresholds used by the report generators
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    // @field: Characters above which a line counts as long
    #[serde(default = "default_long_line_chars")]
    pub long_line_chars: usize,

    // @field: Consecutive long lines forming a dense narration block
    #[serde(default = "default_dense_block_lines")]
    pub dense_block_lines: usize,

    // @field: Max content lines per scene for short-form web pacing
    #[serde(default = "default_web_max_scene_lines")]
    pub web_max_scene_lines: usize,

    // @field: Min share of spoken lines per scene for stage
    #[serde(default = "default_stage_min_dialogue_ratio")]
    pub stage_min_dialogue_ratio: f64,

    // @field: Line count difference between neighbouring scenes flagged as uneven pacing
    #[serde(default = "default_pacing_variation_threshold")]
    pub pacing_variation_threshold: usize,

    // @field: Factor by which one line type must outnumber the other to tip a scene's balance
    #[serde(default = "default_balance_factor")]
    pub balance_factor: usize,

    // @field: Speaking rate used for time estimates
    #[serde(default = "default_words_per_second")]
    pub words_per_second: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            long_line_chars: default_long_line_chars(),
            dense_block_lines: default_dense_block_lines(),
            web_max_scene_lines: default_web_max_scene_lines(),
            stage_min_dialogue_ratio: default_stage_min_dialogue_ratio(),
            pacing_variation_threshold: default_pacing_variation_threshold(),
            balance_factor: default_balance_factor(),
            words_per_second: default_words_per_second(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_long_line_chars() -> usize {
    100
}

fn default_dense_block_lines() -> usize {
    5
}

fn default_web_max_scene_lines() -> usize {
    15
}

fn default_stage_min_dialogue_ratio() -> f64 {
    0.3
}

fn default_pacing_variation_threshold() -> usize {
    4
}

fn default_balance_factor() -> usize {
    2
}

fn default_words_per_second() -> f64 {
    2.5 // 150 words per minute
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.center_width == 0 {
            return Err(ConfigError::invalid("layout.center_width", "must be greater than 0").into());
        }
        if layout.transition_column == 0 {
            return Err(ConfigError::invalid("layout.transition_column", "must be greater than 0").into());
        }
        if layout.paren_indent >= layout.center_width {
            return Err(ConfigError::invalid("layout.paren_indent", "must be less than center_width").into());
        }
        if layout.dialogue_indent >= layout.center_width {
            return Err(ConfigError::invalid("layout.dialogue_indent", "must be less than center_width").into());
        }

        let analysis = &self.analysis;
        if !(0.0..=1.0).contains(&analysis.stage_min_dialogue_ratio) {
            return Err(ConfigError::invalid(
                "analysis.stage_min_dialogue_ratio",
                format!("{} is outside [0, 1]", analysis.stage_min_dialogue_ratio),
            )
            .into());
        }
        if analysis.words_per_second <= 0.0 || analysis.words_per_second.is_nan() {
            return Err(ConfigError::invalid("analysis.words_per_second", "must be positive").into());
        }
        if analysis.dense_block_lines == 0 {
            return Err(ConfigError::invalid("analysis.dense_block_lines", "must be greater than 0").into());
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            layout: LayoutConfig::default(),
            analysis: AnalysisConfig::default(),
            format_on_load: default_true(),
            log_level: LogLevel::default(),
        }
    }
}

/*!
 * Error types for the screenwright application.
 *
 * This module contains custom error types for the configuration and
 * reporting layers, using the thiserror crate for ergonomic error definitions.
 * Classification itself never fails; attribution gaps are reported as data.
 */

use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A field holds a value outside its accepted range
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// The configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Errors that can occur when producing or selecting reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// The requested report section does not exist
    #[error("Unknown report: {0}")]
    UnknownReport(String),

    /// A report was requested before any analysis ran
    #[error("No reports available, run an analysis first")]
    NotAnalyzed,

    /// An analysis was requested before any script was loaded
    #[error("No script loaded")]
    NoScriptLoaded,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from report handling
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

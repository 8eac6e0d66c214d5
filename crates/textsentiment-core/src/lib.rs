//! Shared building blocks for the `textsentiment` tool.
//!
//! Holds the startup configuration (service credentials read from the
//! environment), input document loading, and the sentiment result model with
//! its fixed text rendering.

pub mod app_config;
pub mod config;
pub mod document;
pub mod report;

use thiserror::Error;

pub use app_config::{AnalyzerConfig, Credentials};
pub use config::{load_analyzer_config, load_analyzer_config_from_env};
pub use document::{read_document, DocumentError};
pub use report::{format_result, write_result, ScoreError, SentimentLabel, SentimentResult};

/// Errors raised while building [`AnalyzerConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}; set it before running")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

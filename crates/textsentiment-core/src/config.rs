use crate::app_config::{AnalyzerConfig, Credentials};
use crate::ConfigError;

pub const ENDPOINT_VAR: &str = "AZURE_LANGUAGE_ENDPOINT";
pub const KEY_VAR: &str = "AZURE_LANGUAGE_KEY";
pub const REQUEST_TIMEOUT_VAR: &str = "TEXTSENTIMENT_REQUEST_TIMEOUT_SECS";
pub const LOG_LEVEL_VAR: &str = "TEXTSENTIMENT_LOG_LEVEL";

/// Load analyzer configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_analyzer_config() -> Result<AnalyzerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_analyzer_config_from_env()
}

/// Load analyzer configuration from environment variables already in the process.
///
/// Unlike [`load_analyzer_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_analyzer_config_from_env() -> Result<AnalyzerConfig, ConfigError> {
    build_analyzer_config(|key| std::env::var(key))
}

/// Build analyzer configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] when a credential variable is unset
/// or blank, and [`ConfigError::InvalidEnvVar`] when an optional variable does
/// not parse.
fn build_analyzer_config<F>(lookup: F) -> Result<AnalyzerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    // Unset and blank credential values are both reported as missing.
    let credentials = Credentials::new(
        &lookup(ENDPOINT_VAR).unwrap_or_default(),
        &lookup(KEY_VAR).unwrap_or_default(),
    )?;

    let request_timeout_secs = parse_u64(REQUEST_TIMEOUT_VAR, "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: REQUEST_TIMEOUT_VAR.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let log_level = or_default(LOG_LEVEL_VAR, "warn");

    Ok(AnalyzerConfig {
        credentials,
        request_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

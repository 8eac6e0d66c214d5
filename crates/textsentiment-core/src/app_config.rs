use crate::config::{ENDPOINT_VAR, KEY_VAR};
use crate::ConfigError;

/// Endpoint and key used to authenticate against the sentiment service.
///
/// Only constructible through [`Credentials::new`], so both values are always
/// non-blank.
#[derive(Clone)]
pub struct Credentials {
    endpoint: String,
    key: String,
}

impl Credentials {
    /// Trims both values and rejects blank ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the endpoint or key
    /// variable when that value is empty after trimming.
    pub fn new(endpoint: &str, key: &str) -> Result<Self, ConfigError> {
        let non_blank = |value: &str, var: &str| -> Result<String, ConfigError> {
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::MissingEnvVar(var.to_string()));
            }
            Ok(value.to_string())
        };

        Ok(Self {
            endpoint: non_blank(endpoint, ENDPOINT_VAR)?,
            key: non_blank(key, KEY_VAR)?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("key", &"[redacted]")
            .finish()
    }
}

/// Everything the CLI needs from the environment, read once at startup.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub credentials: Credentials,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

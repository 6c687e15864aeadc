// Validation configuration

use crate::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

/// Default cap on input size, in bytes, for pattern-based validators.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Default date format (`yyyy-MM-dd`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FIELDGUARD";

/// Settings shared by the built-in validators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Inputs longer than this (in bytes) fail before any pattern is run
    pub max_input_len: usize,
    /// chrono format string used by the `birthday` and `date` validators
    pub date_format: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ValidationConfig {
    /// Load from `FIELDGUARD_MAX_INPUT_LEN` and `FIELDGUARD_DATE_FORMAT`.
    ///
    /// Unset variables keep their defaults; a value that is not valid
    /// unicode is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for name in ["MAX_INPUT_LEN", "DATE_FORMAT"] {
            let key = env_key(name);
            match env::var(&key) {
                Ok(value) => {
                    vars.insert(key, value);
                }
                Err(env::VarError::NotPresent) => {}
                Err(source) => return Err(ConfigError::Env { key, source }),
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Load using a custom variable lookup, keyed by the full variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let key = env_key("MAX_INPUT_LEN");
        if let Some(raw) = lookup(&key) {
            config.max_input_len = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::Parse(format!("{}={:?}: {}", key, raw, e)))?;
        }

        if let Some(format) = lookup(&env_key("DATE_FORMAT")) {
            config.date_format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys fall back to defaults.
    ///
    /// ```
    /// use fieldguard_validation::ValidationConfig;
    ///
    /// let config = ValidationConfig::from_toml_str("max_input_len = 512").unwrap();
    /// assert_eq!(config.max_input_len, 512);
    /// assert_eq!(config.date_format, "%Y-%m-%d");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_len == 0 {
            return Err(ConfigError::Invalid(
                "max_input_len must be greater than zero".to_string(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid("date_format cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Override the input cap
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Override the date format
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }
}

fn env_key(name: &str) -> String {
    format!("{}_{}", ENV_PREFIX, name)
}

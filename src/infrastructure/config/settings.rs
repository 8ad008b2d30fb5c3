//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is read from an optional TOML file; every section has
//! defaults, so an absent file or an empty one is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use betbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("betbot.toml")?;
//!     println!("threshold = {}", config.matching.threshold);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::site::{HttpConfig, SitesConfig};
use crate::domain::{Sport, DEFAULT_MATCH_THRESHOLD};
use crate::error::{ConfigError, Result};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "betbot.toml";

/// Match correlation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Quote distance below which two observations are the same match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

const fn default_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// How merged leagues are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One table per league.
    #[default]
    Pretty,
    /// One JSON object per league per line.
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Log output format. The level comes from the command line.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP client settings shared by all sites.
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Sports to check. Defaults to every sport a site covers.
    #[serde(default)]
    pub sports: Option<Vec<String>>,

    /// Per-site sections.
    #[serde(default)]
    pub sites: SitesConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Sports selected for a pass, if restricted.
    #[must_use]
    pub fn selected_sports(&self) -> Option<Vec<Sport>> {
        self.sports
            .as_ref()
            .map(|sports| sports.iter().map(|s| Sport::new(s.trim())).collect())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let threshold = self.matching.threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: "must be a finite number greater than 0".to_string(),
            }
            .into());
        }

        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if let Some(sports) = &self.sports {
            if sports.iter().any(|s| s.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "sports",
                    reason: "sport keys cannot be empty".to_string(),
                }
                .into());
            }
        }

        if self.sites.sisal.enabled && self.sites.sisal.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sites.sisal.base_url",
            }
            .into());
        }
        if self.sites.bwin.enabled && self.sites.bwin.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sites.bwin.base_url",
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::logging::LogFormat;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.matching.threshold, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(config.output.format, OutputFormat::Pretty);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.http.retry_max_attempts, 1);
        assert!(config.sites.sisal.enabled);
        assert!(config.sites.bwin.enabled);
        assert!(config.selected_sports().is_none());
    }

    #[test]
    fn parses_full_file() {
        let toml = r#"
            sports = ["soccer", " tennis "]

            [logging]
            format = "json"

            [http]
            timeout_ms = 2500
            retry_max_attempts = 3

            [matching]
            threshold = 0.03

            [output]
            format = "json"

            [sites.sisal]
            enabled = false

            [sites.bwin]
            base_url = "http://localhost:8080"
            access_id = "secret"
        "#;

        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.http.timeout_ms, 2500);
        assert_eq!(config.http.retry_max_attempts, 3);
        assert_eq!(config.matching.threshold, 0.03);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.sites.sisal.enabled);
        assert_eq!(config.sites.bwin.base_url, "http://localhost:8080");
        assert_eq!(config.sites.bwin.access_id.as_deref(), Some("secret"));
        assert_eq!(
            config.selected_sports(),
            Some(vec![Sport::from("soccer"), Sport::from("tennis")])
        );
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let result = Config::parse_toml("[matching]\nthreshold = 0.0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "threshold",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_attempts() {
        let result = Config::parse_toml("[http]\nretry_max_attempts = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_base_url_for_enabled_site() {
        let result = Config::parse_toml("[sites.sisal]\nbase_url = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));

        let disabled = Config::parse_toml("[sites.sisal]\nenabled = false\nbase_url = \"\"\n");
        assert!(disabled.is_ok());
    }

    #[test]
    fn rejects_unknown_output_format() {
        let result = Config::parse_toml("[output]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/nonexistent/betbot.toml").unwrap();
        assert_eq!(config.matching.threshold, DEFAULT_MATCH_THRESHOLD);
    }
}

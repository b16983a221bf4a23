//! Configuration management for the `FlightRisk` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::FlightRiskError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `FlightRisk` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightRiskConfig {
    /// Weather and risk service settings
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Map provider settings
    #[serde(default)]
    pub map: MapConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Airport table source
    #[serde(default)]
    pub airports: AirportsConfig,
}

/// Settings shared by the weather and risk HTTP services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Base URL serving `/api/weather/airport` and `/api/flight-risk`
    #[serde(default = "default_providers_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_providers_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_providers_max_retries")]
    pub max_retries: u32,
}

/// Map provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map provider credential; without it the app runs list-only
    pub api_key: Option<String>,
    /// Container the map is created in
    #[serde(default = "default_map_container")]
    pub container: String,
    #[serde(default = "default_initial_latitude")]
    pub initial_latitude: f64,
    #[serde(default = "default_initial_longitude")]
    pub initial_longitude: f64,
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: u8,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Airport table source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportsConfig {
    /// JSON file replacing the built-in table
    pub path: Option<PathBuf>,
}

// Default value functions
fn default_providers_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_providers_timeout() -> u32 {
    30
}

fn default_providers_max_retries() -> u32 {
    2
}

fn default_map_container() -> String {
    "map".to_string()
}

// Geographic centre of the contiguous US
fn default_initial_latitude() -> f64 {
    39.8283
}

fn default_initial_longitude() -> f64 {
    -98.5795
}

fn default_initial_zoom() -> u8 {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            base_url: default_providers_base_url(),
            timeout_seconds: default_providers_timeout(),
            max_retries: default_providers_max_retries(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            container: default_map_container(),
            initial_latitude: default_initial_latitude(),
            initial_longitude: default_initial_longitude(),
            initial_zoom: default_initial_zoom(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl FlightRiskConfig {
    /// Load configuration from `config_path`, or the default location when
    /// `None`, with `FLIGHTRISK_*` environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // FLIGHTRISK_PROVIDERS__BASE_URL -> providers.base_url
        builder = builder.add_source(
            Environment::with_prefix("FLIGHTRISK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: FlightRiskConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flightrisk").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.providers.base_url.is_empty() {
            self.providers.base_url = default_providers_base_url();
        }
        if self.providers.timeout_seconds == 0 {
            self.providers.timeout_seconds = default_providers_timeout();
        }
        if self.map.container.is_empty() {
            self.map.container = default_map_container();
        }
        if self.map.initial_zoom == 0 {
            self.map.initial_zoom = default_initial_zoom();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        // Trailing slashes would double up when joining endpoint paths
        let trimmed = self.providers.base_url.trim_end_matches('/').len();
        self.providers.base_url.truncate(trimmed);
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the map credential
    pub fn validate_api_keys(&self) -> Result<()> {
        if let Some(api_key) = &self.map.api_key {
            if api_key.trim().is_empty() {
                return Err(FlightRiskError::config(
                    "Map API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.providers.timeout_seconds > 300 {
            return Err(
                FlightRiskError::config("Provider timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.providers.max_retries > 10 {
            return Err(FlightRiskError::config("Provider max retries cannot exceed 10").into());
        }

        if !(-90.0..=90.0).contains(&self.map.initial_latitude)
            || !(-180.0..=180.0).contains(&self.map.initial_longitude)
        {
            return Err(FlightRiskError::config("Initial map center is not a valid coordinate").into());
        }

        if self.map.initial_zoom > 22 {
            return Err(FlightRiskError::config("Initial map zoom cannot exceed 22").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(FlightRiskError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(FlightRiskError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.providers.base_url.starts_with("http://")
            && !self.providers.base_url.starts_with("https://")
        {
            return Err(FlightRiskError::config(
                "Provider base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = FlightRiskConfig::default();
        assert_eq!(config.providers.base_url, "http://localhost:8080");
        assert_eq!(config.providers.timeout_seconds, 30);
        assert_eq!(config.map.initial_zoom, 4);
        assert_eq!(config.map.container, "map");
        assert_eq!(config.logging.level, "info");
        assert!(config.map.api_key.is_none());
        assert!(config.airports.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_api_key() {
        let mut config = FlightRiskConfig::default();
        config.map.api_key = Some("  ".to_string());
        assert!(config.validate_api_keys().is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = FlightRiskConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = FlightRiskConfig::default();
        config.providers.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = FlightRiskConfig::default();
        config.providers.base_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_trims_base_url() {
        let mut config = FlightRiskConfig::default();
        config.providers.base_url = "https://risk.example.com/".to_string();
        config.providers.timeout_seconds = 0;
        config.apply_defaults();
        assert_eq!(config.providers.base_url, "https://risk.example.com");
        assert_eq!(config.providers.timeout_seconds, 30);
    }

    #[test]
    fn test_load_from_file() {
        let toml = r#"
[providers]
base_url = "http://127.0.0.1:9000/"
max_retries = 0

[map]
api_key = "test-map-key"
initial_zoom = 5

[logging]
level = "debug"
"#;
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let config = FlightRiskConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.providers.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.providers.max_retries, 0);
        assert_eq!(config.providers.timeout_seconds, 30);
        assert_eq!(config.map.api_key.as_deref(), Some("test-map-key"));
        assert_eq!(config.map.initial_zoom, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = FlightRiskConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("flightrisk"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}

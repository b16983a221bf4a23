//! Error types and handling for the `FlightRisk` application

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Short machine-readable classification of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request never produced a response (DNS, connect, reset)
    NetworkError,
    /// The request did not complete within the configured timeout
    Timeout,
    /// The service answered with a non-success HTTP status
    HttpStatus,
    /// The payload could not be decoded into the expected shape
    InvalidResponse,
    /// The service answered with an explicit error object
    UpstreamError,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "network_error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::HttpStatus => "http_status",
            ErrorCode::InvalidResponse => "invalid_response",
            ErrorCode::UpstreamError => "upstream_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level error object stored in place of a weather or risk result.
///
/// `message` is what the assessment panel shows; `upstream` keeps the error
/// label reported by the service itself, when it sent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFailure {
    pub code: ErrorCode,
    pub message: String,
    pub upstream: Option<String>,
}

impl ProviderFailure {
    pub fn new<S: Into<String>>(code: ErrorCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            upstream: None,
        }
    }

    /// Attach the `error` label the upstream service reported
    #[must_use]
    pub fn with_upstream<S: Into<String>>(mut self, upstream: S) -> Self {
        self.upstream = Some(upstream.into());
        self
    }
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Main error type for the `FlightRisk` application
#[derive(Error, Debug)]
pub enum FlightRiskError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The map provider could not be initialised
    #[error("Map unavailable: {message}")]
    MapUnavailable { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON decoding errors for local data files
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl FlightRiskError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new map-unavailable error
    pub fn map_unavailable<S: Into<String>>(message: S) -> Self {
        Self::MapUnavailable {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FlightRiskError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            FlightRiskError::Validation { message } => format!("Invalid input: {message}"),
            FlightRiskError::MapUnavailable { .. } => {
                "Map not available. You can still search and select airports from the list."
                    .to_string()
            }
            FlightRiskError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            FlightRiskError::Json { .. } => {
                "Data file is not valid JSON. Please check its contents.".to_string()
            }
        }
    }
}

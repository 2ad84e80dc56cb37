//! Error types for the Subplat client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Validation and configuration problems are reported before any network
//! activity; transport and protocol failures propagate to the caller
//! untouched. Nothing is swallowed into logs.

use thiserror::Error;

/// The main error type for the Subplat client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid API key: expected 40 lowercase hex characters, got {found}")]
    InvalidApiKey { found: String },

    #[error("Inconsistent account change: {message}")]
    InconsistentAccountChange { message: String },

    // ============================================================================
    // Request Building Errors
    // ============================================================================
    #[error("Unknown resource kind: {name}")]
    UnknownResource { name: String },

    #[error("Missing path parameter '{param}' for resource {resource}")]
    MissingPathParam { resource: String, param: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Retries exhausted after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("Protocol violation: {message}")]
    ProtocolViolation { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid API key error
    pub fn invalid_api_key(found: impl Into<String>) -> Self {
        Self::InvalidApiKey {
            found: found.into(),
        }
    }

    /// Create an inconsistent account change error
    pub fn inconsistent_account(message: impl Into<String>) -> Self {
        Self::InconsistentAccountChange {
            message: message.into(),
        }
    }

    /// Create an unknown resource error
    pub fn unknown_resource(name: impl Into<String>) -> Self {
        Self::UnknownResource { name: name.into() }
    }

    /// Create a missing path parameter error
    pub fn missing_param(resource: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingPathParam {
            resource: resource.into(),
            param: param.into(),
        }
    }

    /// Create a protocol violation error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            message: message.into(),
        }
    }

    /// Check if this error occurred before any network activity
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidApiKey { .. }
                | Error::InconsistentAccountChange { .. }
                | Error::UnknownResource { .. }
                | Error::MissingPathParam { .. }
        )
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::RetriesExhausted { .. })
    }
}

/// Result type alias for the Subplat client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

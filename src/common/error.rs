//! Error types for the booker CLI
//!
//! Every failure class the run can hit has its own variant so that the
//! final report can say which step broke and why.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the booker CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Missing environment variable {0}. Set it in the environment or in .env")]
    MissingEnv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read fixture '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Failed to parse fixture: {0}")]
    FixtureParse(String),

    // === Transport Errors ===
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned unexpected status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    // === Assertion Errors ===
    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Lifecycle failed at step {step}: {message}")]
    ScenarioFailed { step: usize, message: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unexpected-status error for an endpoint
    pub fn unexpected_status(endpoint: &str, status: u16) -> Self {
        Self::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            status,
        }
    }

    /// Create an assertion error comparing an expected and an actual value
    pub fn field_mismatch(
        field: &str,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::Assertion(format!(
            "Field '{}': expected '{}', got '{}'",
            field, expected, actual
        ))
    }
}

//! Error types for the fraud engine
//!
//! Scoring itself is total over validated input; every variant here comes
//! from building or reloading a policy.

use thiserror::Error;

/// Fraud engine error
#[derive(Debug, Error)]
pub enum Error {
    /// A startup invariant on the configuration does not hold
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Layered configuration could not be assembled
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// TOML policy file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Transaction or config payload could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the digest core.
//!
//! The classification and aggregation pipeline itself is total and never
//! returns errors. Errors exist only at the boundary: configuration
//! overrides and message batches are validated before entering the core.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Message error: {0}")]
    Message(#[from] MessageError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Malformed message records, rejected before classification.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Message at index {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Result type alias for the digest core.
pub type Result<T> = std::result::Result<T, Error>;

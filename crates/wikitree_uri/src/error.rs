//! URI minting error types.

use thiserror::Error;

/// Errors that can occur while configuring URI minting.
#[derive(Debug, Error)]
pub enum UriError {
    /// The configuration is well-formed but not usable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UriError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

//! Error types for broker URI resolution.

use thiserror::Error;

/// Result type for transport configuration operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while resolving a broker URI.
#[derive(Error, Debug)]
pub enum TransportError {
    /// URI does not match the broker URI grammar.
    #[error("invalid broker URI: {0}")]
    InvalidUri(String),

    /// An option value does not parse as its expected type.
    #[error("invalid option '{key}': {message}")]
    InvalidOption {
        /// Case-normalized option key.
        key: String,
        /// What went wrong with the value.
        message: String,
    },

    /// Configuration error (credential overrides, discovery failures).
    #[error("configuration error: {0}")]
    Config(String),
}

impl TransportError {
    /// Create an invalid URI error.
    pub fn invalid_uri(message: impl Into<String>) -> Self {
        Self::InvalidUri(message.into())
    }

    /// Create an invalid option error.
    pub fn invalid_option(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a malformed-input error (URI or option value).
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidUri(_) | Self::InvalidOption { .. })
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

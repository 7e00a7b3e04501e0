//! Error types for folder-pager
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Opaque failure reported by a folder provider.
///
/// The engine never inspects or translates it; it reaches the caller as-is.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for folder-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    /// The request was absent or unusable
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with it
        message: String,
    },

    /// The starting cursor matches no folder in the snapshot
    #[error("Cursor '{cursor}' does not refer to a folder in this organization")]
    InvalidCursor {
        /// The cursor as the caller sent it
        cursor: String,
    },

    // ============================================================================
    // Provider Errors
    // ============================================================================
    /// Failure reported by the folder provider, passed through untouched
    #[error(transparent)]
    Provider(ProviderError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or unusable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with it
        message: String,
    },

    /// YAML could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON could not be parsed or encoded
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Filesystem or socket failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Any other error, usually with context prepended
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(cursor: impl ToString) -> Self {
        Self::InvalidCursor {
            cursor: cursor.to_string(),
        }
    }

    /// Wrap a provider failure without altering it
    pub fn provider(err: impl Into<ProviderError>) -> Self {
        Self::Provider(err.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidRequest { .. } | Error::InvalidCursor { .. }
        )
    }

    /// Borrow the provider's own error, if this is one
    pub fn as_provider_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Provider(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Result type alias for folder-pager
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

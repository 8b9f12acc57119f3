//! Error types and handling infrastructure for rquote.
//!
//! A single `thiserror` enum covers every failure the library can produce. Fetch
//! failures are the only domain errors; they are caught by the controller and shown
//! to the user. Storage, configuration and terminal errors propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rquote operations.
#[derive(Error, Debug)]
pub enum RquoteError {
    /// The quote service could not be reached or returned an unusable response
    #[error("{message}")]
    FetchFailure { message: String },

    /// File system related errors (config or storage file IO)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the persistent key-value store failed
    #[error("Storage error: {message}")]
    StorageError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for rquote operations.
pub type Result<T> = std::result::Result<T, RquoteError>;

impl RquoteError {
    /// Create a FetchFailure with a user-facing message
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::FetchFailure {
            message: message.into(),
        }
    }

    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a StorageError with a descriptive message
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// True for errors that belong to a single fetch attempt
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }
}

impl From<std::io::Error> for RquoteError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

// Every reqwest error surfaces during a fetch attempt
impl From<reqwest::Error> for RquoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::fetch(err.to_string())
    }
}

impl From<serde_json::Error> for RquoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("invalid JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let fetch = RquoteError::fetch("Failed to fetch quote.");
        assert_eq!(fetch.to_string(), "Failed to fetch quote.");

        let storage = RquoteError::storage("disk full");
        assert_eq!(storage.to_string(), "Storage error: disk full");

        let missing = RquoteError::ConfigNotFound {
            path: PathBuf::from("/etc/rquote.toml"),
        };
        assert_eq!(missing.to_string(), "Config file not found: /etc/rquote.toml");
    }

    #[test]
    fn test_fetch_failure_classification() {
        assert!(RquoteError::fetch("boom").is_fetch_failure());
        assert!(!RquoteError::config("bad").is_fetch_failure());
        assert!(!RquoteError::ui("resize").is_fetch_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: RquoteError = io_err.into();

        match err {
            RquoteError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: RquoteError = json_err.into();
        assert!(matches!(err, RquoteError::StorageError { .. }));
    }
}

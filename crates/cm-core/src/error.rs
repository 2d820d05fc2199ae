//! Error types for comment-mod

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comment-mod
#[derive(Debug, Error)]
pub enum ModError {
    /// The pending queue could not be fetched; fatal to the run
    #[error("Failed to fetch submissions: {0}")]
    Fetch(String),

    /// Remote deletion failed; non-fatal to the batch
    #[error("Failed to delete submission '{id}': {message}")]
    Delete { id: String, message: String },

    /// A comment record could not be written; non-fatal to the batch
    #[error("Failed to write comment record to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template parsing or rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ModError>,
    },
}

impl ModError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ModError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for comment-mod
pub type Result<T> = std::result::Result<T, ModError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModError::Fetch("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to fetch submissions: connection refused"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = ModError::Template("missing field".to_string());
        let err = err.with_context("Failed to render comment");
        assert!(err.to_string().contains("Failed to render comment"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ModError = io_err.into();
        assert!(matches!(err, ModError::Io(_)));
    }
}

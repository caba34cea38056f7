//! Error types for snippetbook.
//!
//! Library crates use [`SnippetbookError`] via `thiserror`.
//! The CLI crate wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all snippetbook operations.
#[derive(Debug, thiserror::Error)]
pub enum SnippetbookError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Notebook JSON encoding/decoding error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Data validation error (malformed notebook structure, unknown snippet, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SnippetbookError>;

impl SnippetbookError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SnippetbookError::config("missing [notebook] section");
        assert_eq!(err.to_string(), "config error: missing [notebook] section");

        let err = SnippetbookError::validation("cell 3 has an empty id");
        assert!(err.to_string().contains("cell 3"));
    }
}

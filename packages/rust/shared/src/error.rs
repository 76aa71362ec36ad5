//! Error types for promptcat.
//!
//! Library crates use [`CatalogError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all promptcat operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// HTML export parsing or message extraction error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Spreadsheet reading error (workbook, sheet, or cell level).
    #[error("sheet error: {0}")]
    Sheet(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (schema mismatch, empty catalog, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON serialization/deserialization error.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
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
        let err = CatalogError::config("missing chat export path");
        assert_eq!(err.to_string(), "config error: missing chat export path");

        let err = CatalogError::validation("schema_version 99 not supported");
        assert!(err.to_string().contains("schema_version 99"));
    }

    #[test]
    fn sheet_error_display() {
        let err = CatalogError::Sheet("worksheet 'Comments' not found".into());
        assert_eq!(err.to_string(), "sheet error: worksheet 'Comments' not found");
    }
}

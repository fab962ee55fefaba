/// Structured error types for listkit-core.
///
/// The list pipeline itself never fails; these cover the width store, panel
/// validation and dataset lookup. The CLI wraps them in
/// `anyhow` for context.

use std::io;
use thiserror::Error;

/// Main error type for listkit-core operations
#[derive(Error, Debug)]
pub enum ListkitError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Panel width bounds are inconsistent
    #[error("Invalid panel bounds (default {default}, min {min}, max {max}): {reason}")]
    InvalidPanel {
        default: u32,
        min: u32,
        max: u32,
        reason: String,
    },

    /// No sample dataset with that name
    #[error("Unknown dataset '{name}' (expected one of: {expected})")]
    UnknownDataset { name: String, expected: String },
}

/// Result type alias for listkit-core operations
pub type Result<T> = std::result::Result<T, ListkitError>;

impl ListkitError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid panel error
    pub fn invalid_panel(default: u32, min: u32, max: u32, reason: impl Into<String>) -> Self {
        Self::InvalidPanel {
            default,
            min,
            max,
            reason: reason.into(),
        }
    }

    /// Create an unknown dataset error
    pub fn unknown_dataset(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownDataset {
            name: name.into(),
            expected: expected.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ListkitError::invalid_panel(100, 200, 300, "default below min");
        assert_eq!(
            err.to_string(),
            "Invalid panel bounds (default 100, min 200, max 300): default below min"
        );

        let err = ListkitError::unknown_dataset("nope", &["tasks", "files"]);
        assert!(err.to_string().contains("'nope'"));
        assert!(err.to_string().contains("tasks, files"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ListkitError = io_err.into();

        assert!(matches!(err, ListkitError::Io { .. }));
    }
}

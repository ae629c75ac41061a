//! # Error Types
//!
//! Structured error types for arena_core. Most "errors" in the workspace are
//! policy rejections: the state holders report them, and the composer keeps
//! the last known-good state. File and settings failures are the only errors
//! that reach a user.
//!
//! ## Example
//!
//! ```rust
//! use arena_core::errors::{WorkspaceError, WorkspaceResult};
//!
//! fn require_registered(value: &str, known: &[&str]) -> WorkspaceResult<()> {
//!     if !known.contains(&value) {
//!         return Err(WorkspaceError::unknown_language(value));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_registered("cobol", &["python"]).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for arena_core operations
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Structured error type for workspace operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WorkspaceError {
    /// Language value not present in the injected registry
    #[error("Unknown language: '{value}' is not in the language registry")]
    UnknownLanguage { value: String },

    /// Theme identifier not present in the theme registry
    #[error("Unknown theme: '{value}'")]
    UnknownTheme { value: String },

    /// Tab name outside the fixed tab set
    #[error("Unknown tab: '{value}'")]
    UnknownTab { value: String },

    /// A settings value is invalid
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or TOML (de)serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl WorkspaceError {
    /// Create an UnknownLanguage error
    pub fn unknown_language(value: impl Into<String>) -> Self {
        WorkspaceError::UnknownLanguage { value: value.into() }
    }

    /// Create an UnknownTheme error
    pub fn unknown_theme(value: impl Into<String>) -> Self {
        WorkspaceError::UnknownTheme { value: value.into() }
    }

    /// Create an UnknownTab error
    pub fn unknown_tab(value: impl Into<String>) -> Self {
        WorkspaceError::UnknownTab { value: value.into() }
    }

    /// Create an InvalidSetting error
    pub fn invalid_setting(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        WorkspaceError::InvalidSetting {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        WorkspaceError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        WorkspaceError::SerializationError { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WorkspaceError::UnknownLanguage { .. } => "UNKNOWN_LANGUAGE",
            WorkspaceError::UnknownTheme { .. } => "UNKNOWN_THEME",
            WorkspaceError::UnknownTab { .. } => "UNKNOWN_TAB",
            WorkspaceError::InvalidSetting { .. } => "INVALID_SETTING",
            WorkspaceError::FileError { .. } => "FILE_ERROR",
            WorkspaceError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = WorkspaceError::unknown_language("cobol");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnknownLanguage"));
        let roundtrip: WorkspaceError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WorkspaceError::unknown_theme("solarized").error_code(), "UNKNOWN_THEME");
        assert_eq!(
            WorkspaceError::file_error("read", "p.json", "missing").error_code(),
            "FILE_ERROR"
        );
    }
}

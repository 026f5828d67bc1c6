//! # Theme Error Types
//!
//! Error types for the theme engine and its preference stores.
//!
//! The engine itself is total over its input domain: corrupt preference values
//! are normalized to defaults and store failures are logged, never surfaced.
//! These errors exist for the collaborators (stores, color parsing, settings)
//! whose callers do want to know what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Reading a preference file failed.
    #[error("Failed to read preference store {path:?}: {source}")]
    StoreRead {
        /// The path of the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a preference file failed.
    #[error("Failed to write preference store {path:?}: {source}")]
    StoreWrite {
        /// The path of the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A preference file exists but is not a valid key/value table.
    #[error("Failed to parse preference store {path:?}: {details}")]
    StoreParse {
        /// The path of the store file.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A configuration file was not found.
    #[error("Configuration file not found: {path:?}")]
    ConfigNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason,
        }
    }

    /// Create a store read error.
    pub fn store_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreRead {
            path: path.into(),
            source,
        }
    }

    /// Create a store write error.
    pub fn store_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a store parse error.
    pub fn store_parse(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::StoreParse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a configuration not found error.
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}

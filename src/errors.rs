//! Error type for tonemap operations.
//!
//! The analysis engine itself cannot fail; the only precondition it has is a
//! non-blank input, reported as [`TonemapError::EmptyInput`]. The remaining
//! variants belong to the edges: reading input, writing reports, and loading
//! configuration.
//!
//! # Error Codes
//!
//! - E001-E009: Input validation errors
//! - E010-E019: I/O errors
//! - E020-E029: Configuration errors
//!
//! # Example
//!
//! ```rust
//! use tonemap::errors::{ErrorCode, TonemapError};
//!
//! let err = tonemap::try_analyze("   ").unwrap_err();
//! assert!(matches!(err, TonemapError::EmptyInput));
//! assert_eq!(err.code(), ErrorCode::INPUT_EMPTY);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Input error - blank text
    pub const INPUT_EMPTY: ErrorCode = ErrorCode("E001");

    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E010");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E011");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E019");

    /// Config error - invalid contents
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file could not be read
    pub const CONFIG_UNREADABLE: ErrorCode = ErrorCode("E021");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum TonemapError {
    /// The text to analyze was empty or whitespace only.
    #[error("Input text is empty")]
    EmptyInput,

    /// Reading input or writing output failed.
    #[error("{message}")]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file problems.
    #[error("Configuration error: {message}")]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },
}

impl TonemapError {
    /// Wrap a std::io::Error, picking the code from its kind.
    #[must_use]
    pub fn from_io_error(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
            std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
            _ => ErrorCode::IO_GENERIC,
        };
        let message = match &path {
            Some(path) => format!("{}: {}", path.display(), err),
            None => err.to_string(),
        };
        Self::Io {
            code,
            message,
            path,
            source: Some(err),
        }
    }

    #[must_use]
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            path,
        }
    }

    #[must_use]
    pub fn config_unreadable(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_UNREADABLE,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput => ErrorCode::INPUT_EMPTY,
            Self::Io { code, .. } => *code,
            Self::Config { code, .. } => *code,
        }
    }

    /// Whether the user can fix this by changing their input or config.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::EmptyInput | Self::Config { .. } => true,
            Self::Io { code, .. } => *code == ErrorCode::IO_FILE_NOT_FOUND,
        }
    }
}

//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for speclens operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (bad root, missing test tree). Fatal to the run.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Parsing errors, recovered per file by the batch drivers
    #[error("Parse error in {file}:{line}:{column}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// In-place rewrite failures
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Unsupported dialect or file shape
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Walker errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a parse error with source position
    pub fn parse(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a write error with path context
    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error should abort the whole run rather than one file
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

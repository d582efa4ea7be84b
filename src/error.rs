//! Error types for wavjson

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wavjson operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavjson
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Malformed container or document
    #[error("Format error: {0}")]
    Format(String),

    /// Caller supplied an unrecognized argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Container uses an encoding this crate does not handle
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// True for errors caused by the content of a container or document
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_) | Error::Unsupported(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(format!("JSON document: {}", err))
    }
}

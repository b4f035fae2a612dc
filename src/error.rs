//! Error types for theatre_text.
//!
//! Segmentation itself is total and never fails; errors only come from
//! configuration parsing and from the I/O side of the rendering adapters.

use std::fmt;
use std::io;

/// Result type alias for theatre_text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for theatre_text operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// Unrecognized segmentation mode name (e.g. from `THEATRE_SPLIT_MODE`).
    UnknownMode(String),
    /// A configuration value that could not be interpreted.
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnknownMode(s) => write!(
                f,
                "unknown split mode: {s} (valid: ungrouped, latin, kinsoku, korean)"
            ),
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

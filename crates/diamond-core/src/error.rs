// File: crates/diamond-core/src/error.rs
// Summary: Error types for color parsing and design document I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex color '{0}'")]
    InvalidDigit(String),
}

/// Failures while reading or writing a design document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("file '{}' doesn't exist", .0.display())]
    NotFound(PathBuf),

    #[error("i/o error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed design document")]
    Malformed(#[from] serde_json::Error),

    #[error("{field} is {value}, above the limit of {max}")]
    OutOfRange { field: &'static str, value: u32, max: u32 },
}

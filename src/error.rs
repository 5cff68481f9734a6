//! Error types shared by the grid, world and persistence layers.

use thiserror::Error;

/// Errors raised by grid access, region operations and the file codecs.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A coordinate fell outside `[0, width) x [0, height)`.
    #[error("coordinate ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// A crop or merge rectangle was negative, inverted or did not fit.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Malformed ASCII or binary input.
    #[error("malformed {format} input: {reason}")]
    Format {
        format: &'static str,
        reason: String,
    },

    /// The underlying file could not be opened, read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl LifeError {
    pub(crate) fn region(reason: impl Into<String>) -> Self {
        LifeError::InvalidRegion(reason.into())
    }

    pub(crate) fn format(format: &'static str, reason: impl Into<String>) -> Self {
        LifeError::Format {
            format,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

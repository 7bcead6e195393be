// src/error.rs
//! Error types for loading, decoding and writing EDID blocks

use std::path::PathBuf;
use thiserror::Error;

/// Result type for EDID operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. The degraded name-tag patch is not one of these; it is
/// reported through [`crate::NameTagOutcome::Skipped`].
#[derive(Error, Debug)]
pub enum Error {
    /// File missing, unreadable or unwritable
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input is not a single 128-byte base block
    #[error("got {len} bytes, expected exactly {expected} for a single-block EDID", expected = crate::EDID_BLOCK_LEN)]
    Format { len: usize },

    /// Embedded hex payload failed to decode
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the structural length failure
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// True for file system failures
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

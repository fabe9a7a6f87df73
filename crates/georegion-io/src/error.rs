//! I/O error types
//!
//! Provides a unified error type for reading and writing maps. Failures
//! fall into three kinds: the source could not be opened or read, the grid
//! it describes is malformed, or memory ran out. The `is_*` helpers classify
//! an error into one of those kinds.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for map I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The map source could not be opened
    #[error("cannot open map source '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an opened source failed
    #[error("failed to read map source: {0}")]
    Read(#[source] std::io::Error),

    /// Writing a map failed
    #[error("failed to write map: {0}")]
    Write(#[source] std::io::Error),

    /// An error from the core library (malformed grid, allocation failure)
    #[error(transparent)]
    Core(#[from] georegion_core::Error),
}

impl IoError {
    /// True if the source could not be opened or read.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. } | Self::Read(_))
    }

    /// True if the input described a non-rectangular grid.
    pub fn is_malformed_grid(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_malformed_grid())
    }

    /// True if a buffer could not be allocated.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_allocation_failure())
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

//! Top-level error type
//!
//! Collapses the per-crate errors into the three failure kinds a caller has
//! to distinguish.

use georegion_io::IoError;
use georegion_region::RegionError;
use thiserror::Error;

/// Failure kinds surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The map could not be opened or read
    SourceUnavailable,
    /// The map is not rectangular
    MalformedGrid,
    /// A buffer could not be allocated
    AllocationFailure,
    /// Anything else (an internal invariant was violated)
    Other,
}

/// georegion error type
#[derive(Error, Debug)]
pub enum Error {
    /// Map reading failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Region counting failed
    #[error(transparent)]
    Region(#[from] RegionError),
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(e) if e.is_source_unavailable() => ErrorKind::SourceUnavailable,
            Self::Io(e) if e.is_malformed_grid() => ErrorKind::MalformedGrid,
            Self::Io(e) if e.is_allocation_failure() => ErrorKind::AllocationFailure,
            Self::Region(RegionError::Core(e)) if e.is_allocation_failure() => {
                ErrorKind::AllocationFailure
            }
            _ => ErrorKind::Other,
        }
    }
}

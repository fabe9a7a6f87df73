//! Error types for georegion-core
//!
//! Provides a unified error type for grid construction and cell access.
//! Each variant captures enough context for diagnostics without exposing
//! the flat cell layout.

use thiserror::Error;

/// georegion-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Cell coordinates outside the grid
    #[error("cell ({row}, {col}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// A row whose length disagrees with the width set by the first row
    #[error("malformed grid: row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat cell data whose length disagrees with the requested dimensions
    #[error("malformed grid: {actual} cells supplied for a {width}x{height} grid")]
    CellCountMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    /// Grid dimensions whose product does not fit in memory
    #[error("grid dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: usize, height: usize },

    /// Memory allocation failed
    #[error("memory allocation failed: {0}")]
    AllocationFailed(#[from] std::collections::TryReserveError),
}

impl Error {
    /// True for errors describing an inconsistent grid shape.
    pub fn is_malformed_grid(&self) -> bool {
        matches!(
            self,
            Self::RaggedRow { .. } | Self::CellCountMismatch { .. } | Self::DimensionOverflow { .. }
        )
    }

    /// True for errors caused by allocation failure.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailed(_))
    }
}

/// Result type alias for georegion-core operations
pub type Result<T> = std::result::Result<T, Error>;

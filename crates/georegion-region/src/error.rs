//! Error types for georegion-region

use thiserror::Error;

/// Errors that can occur during region traversal
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] georegion_core::Error),

    /// Seed position outside the grid
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: usize, col: usize },

    /// Seed position on a border cell
    #[error("seed position ({row}, {col}) is a border cell")]
    BorderSeed { row: usize, col: usize },

    /// Seed position already assigned to a region
    #[error("seed position ({row}, {col}) already visited")]
    AlreadyVisited { row: usize, col: usize },

    /// Visited set shaped differently from the grid
    #[error("visited set is {actual:?}, grid is {expected:?} (width, height)")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

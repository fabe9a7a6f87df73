//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test map
    #[error("failed to load map '{path}': {message}")]
    MapLoad { path: String, message: String },

    /// Failed to write a map
    #[error("failed to write map '{path}': {message}")]
    MapWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

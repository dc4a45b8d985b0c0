//! Error types for geogrid-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// geogrid error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid matrix dimensions (zero or overflowing)
    #[error("invalid matrix dimensions: {width}x{height}")]
    InvalidDimension { width: u64, height: u64 },

    /// Input is not a rectangular 2-D array
    #[error("invalid matrix shape: {0}")]
    InvalidShape(String),

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} matrix")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Matrix dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for geogrid operations
pub type Result<T> = std::result::Result<T, Error>;

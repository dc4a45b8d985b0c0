//! Error types for geogrid-transform

use thiserror::Error;

/// Errors that can occur during matrix transformations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] geogrid_core::Error),

    /// A scale factor component is not an integer
    #[error("scale must be integer types: {0}")]
    InvalidScaleType(String),

    /// Scale factor components point in different directions
    #[error("dimensions must be scaled in the same direction: got ({y}, {x})")]
    InvalidScaleDirection { y: i64, x: i64 },

    /// Strict down-scaling by a factor that does not divide the matrix
    #[error(
        "matrix can only be scaled down by a factor of its dimensions: \
         {width}x{height} by ({y_scale}, {x_scale})"
    )]
    NonFactorScale {
        width: u32,
        height: u32,
        x_scale: u32,
        y_scale: u32,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

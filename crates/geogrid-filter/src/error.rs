//! Error types for geogrid-filter

use thiserror::Error;

/// Errors that can occur while configuring a kernel pass
///
/// Errors raised by a kernel itself are never wrapped in this type; they
/// are returned to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] geogrid_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

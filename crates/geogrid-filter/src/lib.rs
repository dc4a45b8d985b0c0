//! geogrid-filter - Sliding-window kernels for geogrid matrices
//!
//! This crate provides:
//!
//! - [`apply_kernel`] / [`map_windows`]: run a caller-supplied function over
//!   the square neighborhood of every cell, with constant edge fill
//! - [`KernelSpec`]: radius, edge value and index passing for a pass
//! - [`reducers`]: stock window reducers (center, mean, nodata-aware mean,
//!   min, max, median) and the box filters built from them

pub mod apply;
mod error;
pub mod kernel;
pub mod reducers;

pub use apply::{apply_kernel, map_windows};
pub use error::{FilterError, FilterResult};
pub use kernel::{CellIndex, KernelSpec};
pub use reducers::{max_filter, mean_filter, median_filter, min_filter};

//! geogrid - Resampling and neighborhood kernels for dense 2-D grids
//!
//! # Overview
//!
//! geogrid works on rectangular matrices of numbers such as elevation
//! rasters or gridded measurements. It provides:
//!
//! - Integer block scaling: replicate cells to scale up, average blocks to
//!   scale down, with optional zero-padding and edge correction when the
//!   factor does not divide the dimensions
//! - Sliding-window kernels: apply any function to the neighborhood of
//!   every cell, with constant edge fill
//!
//! # Example
//!
//! ```
//! use geogrid::Matrix;
//! use geogrid::filter::{KernelSpec, map_windows, reducers};
//! use geogrid::transform::{ScaleFactor, ScaleMode, scale};
//!
//! let m = Matrix::from_rows(vec![
//!     vec![1, 1, 1, 1],
//!     vec![2, 2, 3, 3],
//!     vec![4, 4, 5, 5],
//!     vec![6, 7, 8, 9],
//! ])
//! .unwrap();
//!
//! let down = scale(&m, ScaleFactor::new(-2, -2).unwrap(), ScaleMode::Strict)
//!     .unwrap()
//!     .into_f64();
//! assert_eq!(down.to_rows(), vec![vec![1.5, 2.0], vec![5.25, 6.75]]);
//!
//! let spec = KernelSpec::new(1).unwrap();
//! let peaks = map_windows(&m, &spec, |w, _| reducers::max(w));
//! assert_eq!(peaks.get(0, 0).unwrap(), 2);
//! ```
//!
//! # Features
//!
//! - `parallel` - compute output rows concurrently with rayon

// Re-export core types (primary data structures used everywhere)
pub use geogrid_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use geogrid_filter as filter;
pub use geogrid_transform as transform;

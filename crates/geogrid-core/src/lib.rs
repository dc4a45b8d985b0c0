//! geogrid Core - Basic data structures for grid transforms
//!
//! This crate provides the data structures shared by the geogrid crates:
//!
//! - [`Matrix`] - Dense 2-D grid of a single numeric element type
//! - [`Element`] / [`ElementType`] - The numeric types a matrix can hold
//! - [`Error`] / [`Result`] - Errors raised by matrix construction and access
//!
//! # Features
//!
//! - `parallel` - fill cells of [`Matrix::from_fn`] and
//!   [`Matrix::try_map_cells`] concurrently with rayon

pub mod element;
pub mod error;
pub mod matrix;

pub use element::{Element, ElementType};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use matrix::window::MAX_WINDOW_RADIUS;

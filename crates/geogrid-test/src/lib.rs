//! geogrid-test - Regression test framework for geogrid
//!
//! Each regression test creates a [`RegParams`], records numbered
//! comparisons against expected values, and asserts on
//! [`RegParams::cleanup`], which prints a summary of every failure.
//!
//! Two modes are supported:
//!
//! - **Compare**: check every comparison (default)
//! - **Display**: additionally print the matrices passed to
//!   [`RegParams::display_matrix`]
//!
//! # Usage
//!
//! ```
//! use geogrid_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Log filter for the library crates under test

mod params;

pub use params::{RegParams, RegTestMode};

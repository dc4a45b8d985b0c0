//! geogrid-transform - Matrix transformations for geogrid
//!
//! This crate provides:
//!
//! - Integer block scaling: replication to scale up, block means to scale
//!   down, with strict or lenient (zero-padded, edge-corrected) handling
//!   of non-divisible dimensions
//! - Horizontal and vertical flips

mod error;
pub mod factor;
pub mod flip;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use factor::ScaleFactor;
pub use flip::{flip_lr, flip_tb};
pub use scale::{ScaleMode, ScaledMatrix, scale, scale_by, scale_down, scale_up};

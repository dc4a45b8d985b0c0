//! Kernel pass configuration
//!
//! A [`KernelSpec`] describes how windows are cut out of a matrix before a
//! kernel sees them: the window radius, the value used for positions past
//! the matrix edge, and whether the kernel is told which cell it is
//! computing.

use crate::{FilterError, FilterResult};
use geogrid_core::{Element, MAX_WINDOW_RADIUS};

/// Position of the cell a kernel is computing, in matrix coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl CellIndex {
    /// Create a cell index from column and row
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Window configuration for a kernel pass
///
/// # Examples
///
/// ```
/// use geogrid_filter::KernelSpec;
///
/// let spec = KernelSpec::new(2).unwrap().with_edge_value(-1.0f32);
/// assert_eq!(spec.window_size(), 5);
/// assert_eq!(spec.edge_value(), -1.0);
/// assert!(!spec.pass_index());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelSpec<T> {
    radius: u32,
    edge_value: T,
    pass_index: bool,
}

impl<T: Element> KernelSpec<T> {
    /// Create a spec with the given radius, zero edge fill and no index.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidParameters` if `radius` exceeds
    /// [`MAX_WINDOW_RADIUS`], above which a window cannot be allocated.
    pub fn new(radius: u32) -> FilterResult<Self> {
        if radius > MAX_WINDOW_RADIUS {
            return Err(FilterError::InvalidParameters(format!(
                "radius {radius} exceeds maximum {MAX_WINDOW_RADIUS}"
            )));
        }
        Ok(Self {
            radius,
            edge_value: T::zero(),
            pass_index: false,
        })
    }

    /// Set the value used for window positions outside the matrix
    pub fn with_edge_value(mut self, edge_value: T) -> Self {
        self.edge_value = edge_value;
        self
    }

    /// Set whether the kernel receives the cell index
    pub fn with_pass_index(mut self, pass_index: bool) -> Self {
        self.pass_index = pass_index;
        self
    }

    /// Cells on each side of the center
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Value used for window positions outside the matrix
    pub fn edge_value(&self) -> T {
        self.edge_value
    }

    /// Whether the kernel receives the cell index
    pub fn pass_index(&self) -> bool {
        self.pass_index
    }

    /// Side length of every window, `2 * radius + 1`
    pub fn window_size(&self) -> u32 {
        2 * self.radius + 1
    }
}

impl<T: Element> Default for KernelSpec<T> {
    fn default() -> Self {
        Self {
            radius: 0,
            edge_value: T::zero(),
            pass_index: false,
        }
    }
}

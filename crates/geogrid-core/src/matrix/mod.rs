//! Matrix - Dense 2-D numeric grid
//!
//! `Matrix<T>` is a rectangular array of a single numeric element type,
//! the common currency of the scaling and kernel operations.
//!
//! See [`build`] for parallel-capable construction, [`border`] for padding
//! and [`window`] for neighborhood extraction.
//!
//! # Examples
//!
//! ```
//! use geogrid_core::Matrix;
//!
//! // A 3 row x 2 column matrix
//! let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
//! assert_eq!(m.width(), 2);
//! assert_eq!(m.height(), 3);
//! assert_eq!(m.get(1, 2).unwrap(), 6);
//!
//! let mean = m.mean();
//! assert_eq!(mean, 3.5);
//! ```

pub mod border;
pub mod build;
pub mod window;

use crate::element::{Element, ElementType};
use crate::error::{Error, Result};

/// Dense 2-D matrix
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The cell at (x, y)
/// (column x, row y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Number of columns
    width: u32,
    /// Number of rows
    height: u32,
    /// Cell data (row-major, no padding)
    data: Vec<T>,
}

/// Number of cells in a `width x height` matrix, rejecting empty and
/// overflowing shapes.
pub(crate) fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension {
            width: width as u64,
            height: height as u64,
        });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension {
            width: width as u64,
            height: height as u64,
        })
}

/// Only NaN is unordered with respect to itself.
#[inline]
fn is_nan<T: PartialOrd>(v: T) -> bool {
    v.partial_cmp(&v).is_none()
}

impl<T: Element> Matrix<T> {
    /// Create a new matrix with all cells set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, T::zero())
    }

    /// Create a new matrix with all cells set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogrid_core::Matrix;
    ///
    /// let m = Matrix::new_with_value(4, 3, 0.5f32).unwrap();
    /// assert_eq!(m.get(3, 2).unwrap(), 0.5);
    /// ```
    pub fn new_with_value(width: u32, height: u32, value: T) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Matrix {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Create a matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length does
    /// not match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::InvalidShape(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Matrix {
            width,
            height,
            data,
        })
    }

    /// Create a matrix from a list of rows
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidShape` if there are no rows, a row is empty,
    /// or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidShape("matrix has no rows".into()));
        };
        let ncols = first.len();
        if ncols == 0 {
            return Err(Error::InvalidShape("matrix has no columns".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(Error::InvalidShape(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                ncols
            )));
        }

        let width = u32::try_from(ncols).map_err(|_| Error::InvalidDimension {
            width: ncols as u64,
            height: rows.len() as u64,
        })?;
        let height = u32::try_from(rows.len()).map_err(|_| Error::InvalidDimension {
            width: ncols as u64,
            height: rows.len() as u64,
        })?;

        let data = rows.into_iter().flatten().collect();
        Ok(Matrix {
            width,
            height,
            data,
        })
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a matrix has at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Runtime tag of the element type
    #[inline]
    pub fn element_type(&self) -> ElementType {
        T::TYPE
    }

    /// Get the value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<T> {
        self.check_index(x, y)?;
        Ok(self.get_unchecked(x, y))
    }

    /// Set the value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        self.check_index(x, y)?;
        self.set_unchecked(x, y, value);
        Ok(())
    }

    /// Get the value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> T {
        self.data[self.index(x, y)]
    }

    /// Set the value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    fn check_index(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Get raw access to the cell data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get mutable access to the cell data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major data
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Get a row of cells
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of cells
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Copy the cells out as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Set all cells to the specified value
    pub fn set_all(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Apply `f` to every cell, producing a matrix of the same shape
    pub fn map<U: Element>(&self, f: impl FnMut(T) -> U) -> Matrix<U> {
        Matrix {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Convert every cell to `f64`
    pub fn to_f64(&self) -> Matrix<f64> {
        self.map(Element::to_f64)
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Sum of all cells, accumulated in `f64`
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|v| v.to_f64()).sum()
    }

    /// Arithmetic mean of all cells
    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Smallest cell value
    ///
    /// NaN cells never compare smaller, so they are skipped unless every
    /// cell is NaN.
    pub fn min_value(&self) -> T {
        let mut iter = self.data.iter().copied();
        let first = iter.next().unwrap_or_else(T::zero);
        iter.fold(first, |acc, v| if v < acc || is_nan(acc) { v } else { acc })
    }

    /// Largest cell value
    ///
    /// NaN cells never compare larger, so they are skipped unless every
    /// cell is NaN.
    pub fn max_value(&self) -> T {
        let mut iter = self.data.iter().copied();
        let first = iter.next().unwrap_or_else(T::zero);
        iter.fold(first, |acc, v| if v > acc || is_nan(acc) { v } else { acc })
    }
}

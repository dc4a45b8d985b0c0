//! Matrix flips
//!
//! Grids read from sources whose first row is the bottom of the covered
//! area are flipped top-bottom before scaling or kernel passes, so that
//! row 0 is always the top edge.

use crate::TransformResult;
use geogrid_core::{Element, Matrix};

/// Flip a matrix left-right (horizontal mirror)
pub fn flip_lr<T: Element>(matrix: &Matrix<T>) -> TransformResult<Matrix<T>> {
    let w = matrix.width();
    Ok(Matrix::from_fn(w, matrix.height(), |x, y| {
        matrix.get_unchecked(w - 1 - x, y)
    })?)
}

/// Flip a matrix top-bottom (vertical mirror)
pub fn flip_tb<T: Element>(matrix: &Matrix<T>) -> TransformResult<Matrix<T>> {
    let h = matrix.height();
    Ok(Matrix::from_fn(matrix.width(), h, |x, y| {
        matrix.get_unchecked(x, h - 1 - y)
    })?)
}

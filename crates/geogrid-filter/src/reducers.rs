//! Stock window reducers and ready-made filters
//!
//! The reducers take a window as produced by [`apply_kernel`] and
//! collapse it to a single value, so they can be passed directly as (or
//! called from) kernels. The filters run one of them over every cell.
//!
//! NaN cells are ignored by every reducer except [`center`] and [`mean`].
//!
//! [`apply_kernel`]: crate::apply_kernel

use crate::kernel::KernelSpec;
use crate::{FilterResult, map_windows};
use geogrid_core::{Element, Matrix};
use std::cmp::Ordering;

/// The center cell of a window
pub fn center<T: Element>(window: &Matrix<T>) -> T {
    window.get_unchecked(window.width() / 2, window.height() / 2)
}

/// Mean of every cell of a window, edge fill included
pub fn mean<T: Element>(window: &Matrix<T>) -> f64 {
    window.mean()
}

/// Mean of the cells that are neither `no_data` nor NaN
///
/// Returns NaN when no cell qualifies.
///
/// # Examples
///
/// ```
/// use geogrid_core::Matrix;
/// use geogrid_filter::reducers::mean_excluding;
///
/// let w = Matrix::from_rows(vec![vec![-9999, 2], vec![4, -9999]]).unwrap();
/// assert_eq!(mean_excluding(&w, -9999), 3.0);
/// ```
pub fn mean_excluding<T: Element>(window: &Matrix<T>, no_data: T) -> f64 {
    let (sum, count) = window
        .data()
        .iter()
        .copied()
        .filter(|&v| v != no_data)
        .map(Element::to_f64)
        .filter(|f| !f.is_nan())
        .fold((0.0f64, 0usize), |(s, n), f| (s + f, n + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Smallest non-NaN cell of a window
pub fn min<T: Element>(window: &Matrix<T>) -> T {
    window.min_value()
}

/// Largest non-NaN cell of a window
pub fn max<T: Element>(window: &Matrix<T>) -> T {
    window.max_value()
}

/// Lower median of the non-NaN cells of a window
///
/// For an even number of cells this is the smaller of the two middle
/// values, so the result is always a cell of the window. If every cell is
/// NaN, the center cell is returned.
pub fn median<T: Element>(window: &Matrix<T>) -> T {
    let mut values: Vec<T> = window
        .data()
        .iter()
        .copied()
        .filter(|v| v.partial_cmp(v).is_some())
        .collect();
    if values.is_empty() {
        return center(window);
    }
    let mid = (values.len() - 1) / 2;
    let (_, m, _) =
        values.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    *m
}

// ============================================================================
// Filters
// ============================================================================

/// Box mean over a `(2r+1) x (2r+1)` neighborhood
pub fn mean_filter<T: Element>(
    matrix: &Matrix<T>,
    radius: u32,
    edge_value: T,
) -> FilterResult<Matrix<f64>> {
    let spec = KernelSpec::new(radius)?.with_edge_value(edge_value);
    Ok(map_windows(matrix, &spec, |w, _| mean(w)))
}

/// Minimum over a `(2r+1) x (2r+1)` neighborhood
pub fn min_filter<T: Element>(
    matrix: &Matrix<T>,
    radius: u32,
    edge_value: T,
) -> FilterResult<Matrix<T>> {
    let spec = KernelSpec::new(radius)?.with_edge_value(edge_value);
    Ok(map_windows(matrix, &spec, |w, _| min(w)))
}

/// Maximum over a `(2r+1) x (2r+1)` neighborhood
pub fn max_filter<T: Element>(
    matrix: &Matrix<T>,
    radius: u32,
    edge_value: T,
) -> FilterResult<Matrix<T>> {
    let spec = KernelSpec::new(radius)?.with_edge_value(edge_value);
    Ok(map_windows(matrix, &spec, |w, _| max(w)))
}

/// Median over a `(2r+1) x (2r+1)` neighborhood
///
/// Windows always hold an odd number of cells, so without NaN cells this
/// is the exact median.
pub fn median_filter<T: Element>(
    matrix: &Matrix<T>,
    radius: u32,
    edge_value: T,
) -> FilterResult<Matrix<T>> {
    let spec = KernelSpec::new(radius)?.with_edge_value(edge_value);
    Ok(map_windows(matrix, &spec, |w, _| median(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![7, 1, 4], vec![9, 5, 2], vec![3, 8, 6]]).unwrap()
    }

    #[test]
    fn test_scalar_reducers() {
        let w = window();
        assert_eq!(center(&w), 5);
        assert_eq!(mean(&w), 5.0);
        assert_eq!(min(&w), 1);
        assert_eq!(max(&w), 9);
        assert_eq!(median(&w), 5);
    }

    #[test]
    fn test_mean_excluding() {
        let w = Matrix::from_rows(vec![vec![1.0, f64::NAN], vec![-1.0, 3.0]]).unwrap();
        assert_eq!(mean_excluding(&w, -1.0), 2.0);
        let all_missing = Matrix::new_with_value(2, 2, -1.0f32).unwrap();
        assert!(mean_excluding(&all_missing, -1.0).is_nan());
    }

    #[test]
    fn test_median_even_and_nan() {
        let w = Matrix::from_rows(vec![vec![4.0, 1.0], vec![3.0, 2.0]]).unwrap();
        assert_eq!(median(&w), 2.0);

        let w = Matrix::from_rows(vec![vec![f64::NAN, 10.0, f64::NAN]]).unwrap();
        assert_eq!(median(&w), 10.0);

        let w = Matrix::new_with_value(3, 1, f32::NAN).unwrap();
        assert!(median(&w).is_nan());
    }

    #[test]
    fn test_median_filter_removes_spike() {
        let mut m = Matrix::new_with_value(5, 5, 10u8).unwrap();
        m.set(2, 2, 255).unwrap();
        let out = median_filter(&m, 1, 10).unwrap();
        assert!(out.data().iter().all(|&v| v == 10));
    }

    #[test]
    fn test_min_max_filter() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let lo = min_filter(&m, 1, i32::MAX).unwrap();
        let hi = max_filter(&m, 1, i32::MIN).unwrap();
        assert_eq!(lo.to_rows(), vec![vec![1, 1, 2], vec![1, 1, 2], vec![4, 4, 5]]);
        assert_eq!(hi.to_rows(), vec![vec![5, 6, 6], vec![8, 9, 9], vec![8, 9, 9]]);
    }

    #[test]
    fn test_mean_filter_constant() {
        let m = Matrix::new_with_value(4, 3, 2.5f32).unwrap();
        let out = mean_filter(&m, 2, 2.5).unwrap();
        assert!(out.data().iter().all(|&v| (v - 2.5).abs() < 1e-12));
    }
}

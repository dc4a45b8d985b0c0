//! Integer block scaling
//!
//! Grows a matrix by replicating every cell into a block, or shrinks it by
//! replacing every block with its mean:
//!
//! ```text
//! INPUT        factor        OUTPUT
//!
//! | 1 2 |      (2, 2)        | 1 1 2 2 |
//! | 3 4 |                    | 1 1 2 2 |
//!                            | 3 3 4 4 |
//!                            | 3 3 4 4 |
//!
//! | 1 1 1 1 |  (-2, -2)      | 1.5   2.0  |
//! | 2 2 3 3 |                | 5.25  6.75 |
//! | 4 4 5 5 |
//! | 6 7 8 9 |
//!
//! | 1 1 1 1 |  (-3, -3)      | 2.5556  3.0 |
//! | 2 2 3 3 |  lenient       | 7.0     9.0 |
//! | 4 4 5 5 |
//! | 6 7 8 9 |
//! ```
//!
//! In lenient mode a matrix whose dimensions are not multiples of the
//! factor is treated as padded with zero rows at the bottom and zero
//! columns on the right. Blocks on the bottom row and right column of the
//! output hold the mean of their real cells only, which is the padded block
//! mean scaled by `ys / (ys - y_pad)` and `xs / (xs - x_pad)`. The padding
//! is never allocated, so a factor larger than the matrix costs no more
//! than the matrix itself.

use crate::{ScaleFactor, TransformError, TransformResult};
use geogrid_core::{Element, Error, Matrix};
use std::num::NonZeroU32;

/// Handling of dimensions that are not multiples of a down-scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Fail with `TransformError::NonFactorScale`
    #[default]
    Strict,
    /// Zero-pad and correct the boundary blocks
    Lenient,
}

impl From<bool> for ScaleMode {
    /// `true` selects [`ScaleMode::Strict`]
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

/// Result of [`scale`]
///
/// Up-scaling keeps the element type; down-scaling always yields `f64`
/// block means.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaledMatrix<T> {
    /// No-op factor: a copy of the input
    Unchanged(Matrix<T>),
    /// Up-scaled by block replication
    Replicated(Matrix<T>),
    /// Down-scaled by block averaging
    Averaged(Matrix<f64>),
}

impl<T: Element> ScaledMatrix<T> {
    /// Get the dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Unchanged(m) | Self::Replicated(m) => m.dimensions(),
            Self::Averaged(m) => m.dimensions(),
        }
    }

    /// The result as an `f64` matrix
    pub fn into_f64(self) -> Matrix<f64> {
        match self {
            Self::Unchanged(m) | Self::Replicated(m) => m.to_f64(),
            Self::Averaged(m) => m,
        }
    }

    /// The result in the input element type, if it was not averaged
    pub fn into_same_type(self) -> Option<Matrix<T>> {
        match self {
            Self::Unchanged(m) | Self::Replicated(m) => Some(m),
            Self::Averaged(_) => None,
        }
    }
}

/// Scale a matrix by a validated integer factor
///
/// # Arguments
/// * `matrix` - Input matrix
/// * `factor` - Per-axis factor; see [`ScaleFactor`]
/// * `mode` - Divisibility handling when scaling down
///
/// # Errors
///
/// Returns `TransformError::NonFactorScale` for a strict down-scale by a
/// factor that does not divide both dimensions, and
/// `TransformError::Core` if an up-scaled dimension would overflow.
///
/// # Examples
///
/// ```
/// use geogrid_core::Matrix;
/// use geogrid_transform::{ScaleFactor, ScaleMode, scale};
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let up = scale(&m, ScaleFactor::uniform(2).unwrap(), ScaleMode::Strict).unwrap();
/// assert_eq!(up.dimensions(), (4, 4));
///
/// let down = scale(&m, ScaleFactor::uniform(-2).unwrap(), ScaleMode::Strict).unwrap();
/// assert_eq!(down.into_f64().to_rows(), vec![vec![2.5]]);
/// ```
pub fn scale<T: Element>(
    matrix: &Matrix<T>,
    factor: ScaleFactor,
    mode: ScaleMode,
) -> TransformResult<ScaledMatrix<T>> {
    match factor {
        ScaleFactor::NoOp => Ok(ScaledMatrix::Unchanged(matrix.clone())),
        ScaleFactor::Up { y, x } => scale_up(matrix, y, x).map(ScaledMatrix::Replicated),
        ScaleFactor::Down { y, x } => scale_down(matrix, y, x, mode).map(ScaledMatrix::Averaged),
    }
}

/// Scale a matrix by signed per-axis factors
///
/// Positive factors scale up, negative factors scale down, `(0, 0)` is a
/// no-op. `strict` selects [`ScaleMode::Strict`].
///
/// # Errors
///
/// Everything [`ScaleFactor::new`] and [`scale`] can return.
pub fn scale_by<T: Element>(
    matrix: &Matrix<T>,
    y: i64,
    x: i64,
    strict: bool,
) -> TransformResult<ScaledMatrix<T>> {
    scale(matrix, ScaleFactor::new(y, x)?, ScaleMode::from(strict))
}

/// Scale up by block replication
///
/// Output is `(width * x, height * y)`; the cell at (c, r) is the input
/// cell at (c / x, r / y).
///
/// # Errors
///
/// Returns `TransformError::Core` if an output dimension overflows `u32`.
pub fn scale_up<T: Element>(
    matrix: &Matrix<T>,
    y: NonZeroU32,
    x: NonZeroU32,
) -> TransformResult<Matrix<T>> {
    let (ys, xs) = (y.get(), x.get());
    let (w, h) = matrix.dimensions();

    let (Some(wd), Some(hd)) = (w.checked_mul(xs), h.checked_mul(ys)) else {
        return Err(Error::InvalidDimension {
            width: w as u64 * xs as u64,
            height: h as u64 * ys as u64,
        }
        .into());
    };

    log::debug!(
        "scale_up: {}x{} {} by ({}, {}) -> {}x{}",
        w,
        h,
        matrix.element_type(),
        ys,
        xs,
        wd,
        hd
    );

    Ok(Matrix::from_fn(wd, hd, |c, r| {
        matrix.get_unchecked(c / xs, r / ys)
    })?)
}

/// Zero rows (or columns) needed to make `len` a multiple of `scale`.
fn padding(len: u32, scale: u32) -> u32 {
    match len % scale {
        0 => 0,
        rem => scale - rem,
    }
}

/// Scale down by block averaging
///
/// Output is `(ceil(width / x), ceil(height / y))` of `f64` block means.
///
/// # Errors
///
/// Returns `TransformError::NonFactorScale` in [`ScaleMode::Strict`] when
/// `x` does not divide the width or `y` does not divide the height.
pub fn scale_down<T: Element>(
    matrix: &Matrix<T>,
    y: NonZeroU32,
    x: NonZeroU32,
    mode: ScaleMode,
) -> TransformResult<Matrix<f64>> {
    let (ys, xs) = (y.get(), x.get());
    let (w, h) = matrix.dimensions();

    let (y_pad, x_pad) = match mode {
        ScaleMode::Strict => {
            if h % ys != 0 || w % xs != 0 {
                return Err(TransformError::NonFactorScale {
                    width: w,
                    height: h,
                    x_scale: xs,
                    y_scale: ys,
                });
            }
            (0, 0)
        }
        ScaleMode::Lenient => (padding(h, ys), padding(w, xs)),
    };
    assert!(
        y_pad < ys && x_pad < xs,
        "padding ({y_pad}, {x_pad}) must be smaller than scale ({ys}, {xs})"
    );

    log::debug!(
        "scale_down: {}x{} {} by ({}, {}) {:?}, padding ({}, {})",
        w,
        h,
        matrix.element_type(),
        ys,
        xs,
        mode,
        y_pad,
        x_pad
    );

    if y_pad > 0 || x_pad > 0 {
        log::trace!(
            "scale_down: boundary blocks hold {} real rows, {} real columns",
            ys - y_pad,
            xs - x_pad
        );
    }

    Ok(Matrix::from_fn(w.div_ceil(xs), h.div_ceil(ys), |c, r| {
        let (x0, y0) = (c * xs, r * ys);
        let x1 = x0.saturating_add(xs).min(w);
        let y1 = y0.saturating_add(ys).min(h);
        block_sum(matrix, x0, x1, y0, y1) / ((x1 - x0) as f64 * (y1 - y0) as f64)
    })?)
}

/// Sum of the cells in columns `x0..x1` of rows `y0..y1`.
fn block_sum<T: Element>(src: &Matrix<T>, x0: u32, x1: u32, y0: u32, y1: u32) -> f64 {
    (y0..y1)
        .map(|y| {
            src.row(y)[x0 as usize..x1 as usize]
                .iter()
                .map(|v| v.to_f64())
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(v: u32) -> NonZeroU32 {
        NonZeroU32::new(v).unwrap()
    }

    fn doc_matrix() -> Matrix<i32> {
        Matrix::from_rows(vec![
            vec![1, 1, 1, 1],
            vec![2, 2, 3, 3],
            vec![4, 4, 5, 5],
            vec![6, 7, 8, 9],
        ])
        .unwrap()
    }

    fn assert_rows_close(m: &Matrix<f64>, expected: &[&[f64]], tol: f64) {
        assert_eq!(m.height() as usize, expected.len());
        for (row, exp) in m.rows().zip(expected) {
            assert_eq!(row.len(), exp.len());
            for (a, e) in row.iter().zip(exp.iter()) {
                assert!((a - e).abs() <= tol, "got {:?}, expected {:?}", m.to_rows(), expected);
            }
        }
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding(4, 3), 2);
        assert_eq!(padding(6, 3), 0);
        assert_eq!(padding(5, 1), 0);
        assert_eq!(padding(2, 5), 3);
    }

    #[test]
    fn test_scale_up_replicates_blocks() {
        let m = Matrix::from_rows(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
        let up = scale_up(&m, nz(2), nz(2)).unwrap();
        assert_eq!(
            up.to_rows(),
            vec![
                vec![1, 1, 2, 2],
                vec![1, 1, 2, 2],
                vec![3, 3, 4, 4],
                vec![3, 3, 4, 4],
            ]
        );
    }

    #[test]
    fn test_scale_up_anisotropic() {
        let m = Matrix::from_rows(vec![vec![1.5f32, -2.0]]).unwrap();
        let up = scale_up(&m, nz(3), nz(1)).unwrap();
        assert_eq!(up.dimensions(), (2, 3));
        assert!(up.rows().all(|r| r == [1.5, -2.0]));
    }

    #[test]
    fn test_scale_up_overflow() {
        let m = Matrix::<u8>::new(2, 1).unwrap();
        let err = scale_up(&m, nz(1), nz(u32::MAX)).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Core(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_scale_down_strict() {
        let out = scale_down(&doc_matrix(), nz(2), nz(2), ScaleMode::Strict).unwrap();
        assert_eq!(out.to_rows(), vec![vec![1.5, 2.0], vec![5.25, 6.75]]);
    }

    #[test]
    fn test_scale_down_strict_non_factor() {
        let err = scale_down(&doc_matrix(), nz(3), nz(1), ScaleMode::Strict).unwrap_err();
        assert_eq!(
            err,
            TransformError::NonFactorScale {
                width: 4,
                height: 4,
                x_scale: 1,
                y_scale: 3,
            }
        );
    }

    #[test]
    fn test_scale_down_lenient_doc_example() {
        let out = scale_down(&doc_matrix(), nz(3), nz(3), ScaleMode::Lenient).unwrap();
        assert_rows_close(&out, &[&[23.0 / 9.0, 3.0], &[7.0, 9.0]], 1e-12);
    }

    #[test]
    fn test_scale_down_lenient_rows_only() {
        // 3 rows, 2 columns: only the bottom row of blocks is padded
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let out = scale_down(&m, nz(2), nz(2), ScaleMode::Lenient).unwrap();
        assert_rows_close(&out, &[&[2.5], &[5.5]], 1e-12);
    }

    #[test]
    fn test_scale_down_lenient_columns_only() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let out = scale_down(&m, nz(2), nz(2), ScaleMode::Lenient).unwrap();
        assert_rows_close(&out, &[&[3.0, 4.5]], 1e-12);
    }

    #[test]
    fn test_scale_down_lenient_matches_strict_when_divisible() {
        let m = doc_matrix();
        let strict = scale_down(&m, nz(2), nz(2), ScaleMode::Strict).unwrap();
        let lenient = scale_down(&m, nz(2), nz(2), ScaleMode::Lenient).unwrap();
        assert_eq!(strict, lenient);
    }

    #[test]
    fn test_scale_down_factor_larger_than_matrix() {
        let m = Matrix::from_rows(vec![vec![2.0f64, 4.0], vec![6.0, 8.0]]).unwrap();
        let out = scale_down(&m, nz(5), nz(3), ScaleMode::Lenient).unwrap();
        assert_rows_close(&out, &[&[5.0]], 1e-12);
    }

    #[test]
    fn test_scale_down_lenient_huge_factor() {
        let one = Matrix::from_rows(vec![vec![7i32]]).unwrap();
        let out = scale_down(&one, nz(u32::MAX), nz(u32::MAX), ScaleMode::Lenient).unwrap();
        assert_eq!(out.to_rows(), vec![vec![7.0]]);

        let m = Matrix::from_rows(vec![vec![1u16, 2, 3], vec![4, 5, 6]]).unwrap();
        let out = scale_down(&m, nz(100_000), nz(1_000_000), ScaleMode::Lenient).unwrap();
        assert_eq!(out.to_rows(), vec![vec![3.5]]);

        let tall = Matrix::from_fn(2, 5, |x, y| (x + 2 * y) as f32).unwrap();
        let out = scale_down(&tall, nz(2), nz(u32::MAX - 1), ScaleMode::Lenient).unwrap();
        assert_rows_close(&out, &[&[1.5], &[5.5], &[8.5]], 1e-12);
    }

    #[test]
    fn test_scale_dispatch() {
        let m = doc_matrix();
        let same = scale(&m, ScaleFactor::NoOp, ScaleMode::Strict).unwrap();
        assert_eq!(same, ScaledMatrix::Unchanged(m.clone()));

        let up = scale(&m, ScaleFactor::uniform(2).unwrap(), ScaleMode::Strict).unwrap();
        assert!(matches!(up, ScaledMatrix::Replicated(_)));
        assert_eq!(up.dimensions(), (8, 8));

        let down = scale_by(&m, -2, -2, true).unwrap();
        assert!(matches!(down, ScaledMatrix::Averaged(_)));
        assert!(down.clone().into_same_type().is_none());
        assert_eq!(down.into_f64().to_rows(), vec![vec![1.5, 2.0], vec![5.25, 6.75]]);
    }

    #[test]
    fn test_scale_by_mixed_direction() {
        let err = scale_by(&doc_matrix(), 2, -2, true).unwrap_err();
        assert_eq!(err, TransformError::InvalidScaleDirection { y: 2, x: -2 });
    }

    #[test]
    fn test_scale_mode_from_bool() {
        assert_eq!(ScaleMode::from(true), ScaleMode::Strict);
        assert_eq!(ScaleMode::from(false), ScaleMode::Lenient);
    }
}

//! Sliding-window kernel application
//!
//! For each cell of the input, the `(2r+1) x (2r+1)` window centered on it
//! is handed to a kernel function whose return value becomes the output
//! cell. The output has the same shape as the input; its element type is
//! whatever the kernel returns.
//!
//! ```text
//!   input (edge 0, r = 1)     window at (0, 0)     output[0][0]
//!   +---+---+---+             +---+---+---+
//!   | 1 | 2 | 3 |             | 0 | 0 | 0 |
//!   +---+---+---+     --->    +---+---+---+  --->  kernel(window)
//!   | 4 | 5 | 6 |             | 0 | 1 | 2 |
//!   +---+---+---+             +---+---+---+
//!                             | 0 | 4 | 5 |
//!                             +---+---+---+
//! ```

use crate::kernel::{CellIndex, KernelSpec};
use geogrid_core::{Element, Matrix};
use std::convert::Infallible;

/// Apply a fallible kernel to the window around every cell.
///
/// The kernel receives the window and, when `spec.pass_index()` is set,
/// the un-padded coordinates of the cell being computed. The first error
/// returned by the kernel is passed back unchanged. With the `parallel`
/// feature, which failing cell's error is reported is unspecified.
///
/// # Examples
///
/// ```
/// use geogrid_core::Matrix;
/// use geogrid_filter::{KernelSpec, apply_kernel};
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let spec = KernelSpec::new(1).unwrap();
/// let sums = apply_kernel(&m, &spec, |w, _| Ok::<i64, String>(w.sum() as i64)).unwrap();
/// assert_eq!(sums.to_rows(), vec![vec![10, 10], vec![10, 10]]);
/// ```
pub fn apply_kernel<T, U, E, F>(
    matrix: &Matrix<T>,
    spec: &KernelSpec<T>,
    kernel: F,
) -> Result<Matrix<U>, E>
where
    T: Element,
    U: Element,
    E: Send,
    F: Fn(&Matrix<T>, Option<CellIndex>) -> Result<U, E> + Sync,
{
    log::debug!(
        "apply_kernel: {}x{} {}, window {}x{}, pass_index={}",
        matrix.width(),
        matrix.height(),
        matrix.element_type(),
        spec.window_size(),
        spec.window_size(),
        spec.pass_index()
    );

    let radius = spec.radius();
    let edge_value = spec.edge_value();
    let pass_index = spec.pass_index();

    matrix.try_map_cells(|x, y| {
        let window = matrix.window(x, y, radius, edge_value);
        let index = pass_index.then_some(CellIndex { x, y });
        kernel(&window, index)
    })
}

/// Apply an infallible kernel to the window around every cell
pub fn map_windows<T, U, F>(matrix: &Matrix<T>, spec: &KernelSpec<T>, kernel: F) -> Matrix<U>
where
    T: Element,
    U: Element,
    F: Fn(&Matrix<T>, Option<CellIndex>) -> U + Sync,
{
    match apply_kernel(matrix, spec, |w, i| Ok::<U, Infallible>(kernel(w, i))) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

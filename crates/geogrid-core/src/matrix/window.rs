//! Neighborhood extraction
//!
//! A window is the `(2r+1) x (2r+1)` block of cells centered on a given
//! cell. Positions falling outside the matrix take a caller-supplied edge
//! value, as if the matrix had been padded by `r` cells on every side.

use super::Matrix;
use crate::element::Element;

/// Largest supported window radius
///
/// A window at this radius is 2047 x 2047, about 4.2 million cells. Every
/// cell of a kernel pass allocates its own window, so larger radii would
/// exhaust memory long before they finish.
pub const MAX_WINDOW_RADIUS: u32 = 1023;

impl<T: Element> Matrix<T> {
    /// Extract the square window of the given radius centered on (cx, cy).
    ///
    /// # Arguments
    ///
    /// * `cx` - Center column
    /// * `cy` - Center row
    /// * `radius` - Cells on each side of the center (0 gives a 1x1 window)
    /// * `edge_value` - Value for positions outside the matrix
    ///
    /// # Panics
    ///
    /// Panics if (cx, cy) is outside the matrix or `radius` exceeds
    /// [`MAX_WINDOW_RADIUS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use geogrid_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![5]]).unwrap();
    /// let w = m.window(0, 0, 1, 0);
    /// assert_eq!(w.to_rows(), vec![vec![0, 0, 0], vec![0, 5, 0], vec![0, 0, 0]]);
    /// ```
    pub fn window(&self, cx: u32, cy: u32, radius: u32, edge_value: T) -> Matrix<T> {
        assert!(
            cx < self.width && cy < self.height,
            "window center ({cx}, {cy}) outside {}x{} matrix",
            self.width,
            self.height
        );
        assert!(
            radius <= MAX_WINDOW_RADIUS,
            "window radius {radius} exceeds {MAX_WINDOW_RADIUS}"
        );

        let side = 2 * radius + 1;
        let r = radius as i64;
        let (cx, cy) = (cx as i64, cy as i64);
        let (w, h) = (self.width as i64, self.height as i64);

        // Columns [x0, x1] are real; the rest of each real row is edge fill.
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(w - 1);
        let left = (x0 - (cx - r)) as usize;
        let right = ((cx + r) - x1) as usize;

        let mut data = Vec::with_capacity((side as usize) * (side as usize));
        for wy in (cy - r)..=(cy + r) {
            if wy < 0 || wy >= h {
                data.extend(std::iter::repeat_n(edge_value, side as usize));
                continue;
            }
            let row = self.row(wy as u32);
            data.extend(std::iter::repeat_n(edge_value, left));
            data.extend_from_slice(&row[x0 as usize..=x1 as usize]);
            data.extend(std::iter::repeat_n(edge_value, right));
        }

        Matrix {
            width: side,
            height: side,
            data,
        }
    }
}

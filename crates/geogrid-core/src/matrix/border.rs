//! Border operations for matrices
//!
//! Adds constant-valued padding around a matrix, with a different width
//! on each side.

use super::{Matrix, checked_len};
use crate::element::Element;
use crate::error::{Error, Result};

impl<T: Element> Matrix<T> {
    /// Add a general border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width
    /// * `right` - Right border width
    /// * `top` - Top border height
    /// * `bot` - Bottom border height
    /// * `val` - Border cell value
    ///
    /// # Returns
    ///
    /// New matrix with dimensions `(width + left + right, height + top + bot)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if dimensions would overflow.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: T,
    ) -> Result<Matrix<T>> {
        let overflow = || Error::InvalidDimension {
            width: self.width as u64 + left as u64 + right as u64,
            height: self.height as u64 + top as u64 + bot as u64,
        };
        let wd = self
            .width
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or_else(overflow)?;
        let hd = self
            .height
            .checked_add(top)
            .and_then(|h| h.checked_add(bot))
            .ok_or_else(overflow)?;
        let len = checked_len(wd, hd)?;

        log::trace!(
            "add_border_general: {}x{} -> {}x{} (l={}, r={}, t={}, b={})",
            self.width,
            self.height,
            wd,
            hd,
            left,
            right,
            top,
            bot
        );

        let mut data = Vec::with_capacity(len);
        data.resize((top as usize) * (wd as usize), val);
        for row in self.rows() {
            data.extend(std::iter::repeat_n(val, left as usize));
            data.extend_from_slice(row);
            data.extend(std::iter::repeat_n(val, right as usize));
        }
        data.resize(len, val);

        Ok(Matrix {
            width: wd,
            height: hd,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_border_general_bottom_right() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = m.add_border_general(0, 1, 0, 2, 0).unwrap();
        assert_eq!(
            b.to_rows(),
            vec![vec![1, 2, 0], vec![3, 4, 0], vec![0, 0, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_add_border_general_all_sides() {
        let m = Matrix::from_rows(vec![vec![5.0f32]]).unwrap();
        let b = m.add_border_general(1, 2, 1, 1, -1.0).unwrap();
        assert_eq!(b.dimensions(), (4, 3));
        assert_eq!(
            b.to_rows(),
            vec![
                vec![-1.0, -1.0, -1.0, -1.0],
                vec![-1.0, 5.0, -1.0, -1.0],
                vec![-1.0, -1.0, -1.0, -1.0],
            ]
        );
    }

    #[test]
    fn test_add_border_general_zero_is_copy() {
        let m = Matrix::from_data(3, 2, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
        let b = m.add_border_general(0, 0, 0, 0, 9).unwrap();
        assert_eq!(b, m);
    }

    #[test]
    fn test_add_border_general_overflow() {
        let m = Matrix::from_data(2, 1, vec![1i32, 2]).unwrap();
        let err = m.add_border_general(u32::MAX, 0, 0, 0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
    }
}

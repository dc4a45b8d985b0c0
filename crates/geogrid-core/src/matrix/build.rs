//! Cell-wise matrix construction
//!
//! Every output cell is computed independently from its coordinates, so
//! with the `parallel` feature rows are filled concurrently on the rayon
//! thread pool. The sequential and parallel paths produce identical
//! matrices.

use super::{Matrix, checked_len};
use crate::element::Element;
use crate::error::Result;
use std::convert::Infallible;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fill `data` (row-major, `width` cells per row) by calling `f(x, y)`.
fn fill_cells<U, E, F>(data: &mut [U], width: u32, f: &F) -> std::result::Result<(), E>
where
    U: Element,
    E: Send,
    F: Fn(u32, u32) -> std::result::Result<U, E> + Sync,
{
    let fill_row = |(y, row): (usize, &mut [U])| -> std::result::Result<(), E> {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = f(x as u32, y as u32)?;
        }
        Ok(())
    };

    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(width as usize)
            .enumerate()
            .try_for_each(fill_row)
    }

    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_mut(width as usize)
            .enumerate()
            .try_for_each(fill_row)
    }
}

impl<T: Element> Matrix<T> {
    /// Create a matrix whose cell at (x, y) is `f(x, y)`
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
    /// let m = Matrix::from_fn(3, 2, |x, y| x + 10 * y).unwrap();
    /// assert_eq!(m.to_rows(), vec![vec![0, 1, 2], vec![10, 11, 12]]);
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Self>
    where
        F: Fn(u32, u32) -> T + Sync,
    {
        let len = checked_len(width, height)?;
        let mut data = vec![T::zero(); len];
        let filled = fill_cells(&mut data, width, &|x, y| Ok::<T, Infallible>(f(x, y)));
        match filled {
            Ok(()) => {}
            Err(never) => match never {},
        }
        Ok(Matrix {
            width,
            height,
            data,
        })
    }

    /// Build a same-shaped matrix whose cell at (x, y) is `f(x, y)`,
    /// stopping at the first error.
    ///
    /// The error is returned exactly as `f` produced it. When several
    /// cells fail under the `parallel` feature, which error is reported is
    /// unspecified.
    pub fn try_map_cells<U, E, F>(&self, f: F) -> std::result::Result<Matrix<U>, E>
    where
        U: Element,
        E: Send,
        F: Fn(u32, u32) -> std::result::Result<U, E> + Sync,
    {
        let mut data = vec![U::zero(); self.data.len()];
        fill_cells(&mut data, self.width, &f)?;
        Ok(Matrix {
            width: self.width,
            height: self.height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_coordinates() {
        let m = Matrix::from_fn(4, 3, |x, y| (x * 100 + y) as i32).unwrap();
        assert_eq!(m.get(3, 0).unwrap(), 300);
        assert_eq!(m.get(0, 2).unwrap(), 2);
        assert_eq!(m.get(2, 1).unwrap(), 201);
    }

    #[test]
    fn test_from_fn_invalid_dimensions() {
        assert!(Matrix::from_fn(0, 3, |_, _| 0u8).is_err());
    }

    #[test]
    fn test_try_map_cells_same_shape() {
        let m = Matrix::<u8>::new(5, 2).unwrap();
        let out: Matrix<f64> = m
            .try_map_cells(|x, y| Ok::<_, String>((x + y) as f64))
            .unwrap();
        assert_eq!(out.dimensions(), (5, 2));
        assert_eq!(out.get(4, 1).unwrap(), 5.0);
    }

    #[test]
    fn test_try_map_cells_error_passthrough() {
        #[derive(Debug, PartialEq)]
        struct Boom(u32);

        let m = Matrix::<i32>::new(3, 3).unwrap();
        let err = m
            .try_map_cells(|x, y| if y == 2 { Err(Boom(x)) } else { Ok(1i32) })
            .unwrap_err();
        assert!(matches!(err, Boom(_)));
    }
}

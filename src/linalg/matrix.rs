//! Owned dense matrix in row-major layout.

use super::LinalgError;
use faer::Mat;
use std::ops::{Index, IndexMut};

/// Dense `f64` matrix stored row-major in a single `Vec`.
///
/// Indexing with `(row, col)` checks both indices against the shape, so an
/// out-of-range column can never silently read into the next row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![0.0; nrows * ncols],
        }
    }

    /// Square identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Build a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Wrap a row-major buffer.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<f64>) -> Result<Self, LinalgError> {
        if data.len() != nrows * ncols {
            return Err(LinalgError::DataLength {
                nrows,
                ncols,
                got: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Build a matrix from a sequence of equal-length rows.
    ///
    /// An empty slice gives a `0 x 0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * ncols);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != ncols {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected: ncols,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            nrows: rows.len(),
            ncols,
            data,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Entry at `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.nrows && j < self.ncols {
            Some(self.data[i * self.ncols + j])
        } else {
            None
        }
    }

    /// Mutable entry at `(i, j)`, or `None` when out of bounds.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f64> {
        if i < self.nrows && j < self.ncols {
            Some(&mut self.data[i * self.ncols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// Row-major view of the underlying buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Diagonal entries (length `min(nrows, ncols)`).
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.nrows.min(self.ncols))
            .map(|i| self.data[i * self.ncols + i])
            .collect()
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Copy of this matrix with a leading column of ones.
    pub fn with_intercept_column(&self) -> Matrix {
        let ncols = self.ncols + 1;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for row in self.rows() {
            data.push(1.0);
            data.extend_from_slice(row);
        }
        Matrix {
            nrows: self.nrows,
            ncols,
            data,
        }
    }

    /// Matrix-vector product `self * v`.
    ///
    /// # Panics
    /// Panics if `v.len() != ncols`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            v.len(),
            self.ncols,
            "vector length {} does not match {} columns",
            v.len(),
            self.ncols
        );
        self.rows()
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
            .collect()
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: f64) {
        self.data.iter_mut().for_each(|v| *v *= factor);
    }

    /// Whether the matrix is square and `|a_ij - a_ji| <= tol` everywhere.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if self.nrows != self.ncols {
            return false;
        }
        (0..self.nrows).all(|i| (0..i).all(|j| (self[(i, j)] - self[(j, i)]).abs() <= tol))
    }

    /// Index of the first non-finite entry in row-major order.
    pub(crate) fn first_non_finite(&self) -> Option<usize> {
        self.data.iter().position(|v| !v.is_finite())
    }

    /// Convert into a `faer` matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self[(i, j)])
    }
}

impl From<&Mat<f64>> for Matrix {
    fn from(m: &Mat<f64>) -> Self {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.nrows,
            self.ncols
        );
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.nrows,
            self.ncols
        );
        &mut self.data[i * self.ncols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_row_major() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(2, 1)], 6.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_from_row_major_length_check() {
        assert!(Matrix::from_row_major(2, 2, vec![1.0; 4]).is_ok());
        assert!(matches!(
            Matrix::from_row_major(2, 2, vec![1.0; 3]),
            Err(LinalgError::DataLength { got: 3, .. })
        ));
    }

    #[test]
    fn test_get_bounds() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.get(1, 2), Some(0.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn test_index_column_out_of_bounds_panics() {
        // (0, 3) would alias (1, 0) without the per-index check
        let m = Matrix::zeros(2, 3);
        let _ = m[(0, 3)];
    }

    #[test]
    fn test_with_intercept_column() {
        let m = Matrix::from_rows(&[[2.0], [3.0]]).unwrap();
        let aug = m.with_intercept_column();
        assert_eq!(aug.shape(), (2, 2));
        assert_eq!(aug.as_slice(), &[1.0, 2.0, 1.0, 3.0]);
        // original untouched
        assert_eq!(m.shape(), (2, 1));
    }

    #[test]
    fn test_transpose_and_mul_vec() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(m.mul_vec(&[1.0, 0.0, -1.0]), vec![-2.0, -2.0]);
    }

    #[test]
    fn test_identity_symmetric_diagonal() {
        let id = Matrix::identity(3);
        assert!(id.is_symmetric(0.0));
        assert_eq!(id.diagonal(), vec![1.0, 1.0, 1.0]);
        assert!(!Matrix::zeros(2, 3).is_symmetric(0.0));
    }

    #[test]
    fn test_faer_roundtrip() {
        let m = Matrix::from_fn(3, 2, |i, j| (i * 10 + j) as f64);
        let f = m.to_faer();
        assert_eq!(f.nrows(), 3);
        assert_eq!(f[(2, 1)], 21.0);
        assert_eq!(Matrix::from(&f), m);
    }
}

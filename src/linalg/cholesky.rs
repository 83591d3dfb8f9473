//! Cholesky factorization `A = L Lᵗ` of a symmetric positive-definite matrix.

use super::{LinalgError, Matrix};

/// Lower-triangular Cholesky factor.
///
/// Only the lower triangle of the input is read. The factorization works on its
/// own buffer, so the input matrix is left untouched whether or not it succeeds.
#[derive(Debug, Clone)]
pub struct Cholesky {
    l: Matrix,
}

impl Cholesky {
    /// Factor `a`, rejecting any pivot with `pivot <= tolerance * a[j][j]`.
    ///
    /// With `tolerance == 0.0` this is a plain sign check on each pivot. NaN pivots
    /// are always rejected.
    pub fn factor(a: &Matrix, tolerance: f64) -> Result<Self, LinalgError> {
        let (nrows, ncols) = a.shape();
        if nrows != ncols {
            return Err(LinalgError::NotSquare { nrows, ncols });
        }
        let n = nrows;
        let mut l = Matrix::zeros(n, n);

        for j in 0..n {
            let mut pivot = a[(j, j)];
            for k in 0..j {
                pivot -= l[(j, k)] * l[(j, k)];
            }

            let threshold = tolerance * a[(j, j)].abs();
            if !(pivot > threshold) {
                log::trace!("cholesky pivot {} at column {} below {}", pivot, j, threshold);
                return Err(LinalgError::RankDeficient {
                    column: j,
                    pivot,
                    threshold,
                });
            }

            let diag = pivot.sqrt();
            l[(j, j)] = diag;

            for i in (j + 1)..n {
                let mut sum = a[(i, j)];
                for k in 0..j {
                    sum -= l[(i, k)] * l[(j, k)];
                }
                l[(i, j)] = sum / diag;
            }
        }

        Ok(Self { l })
    }

    /// Dimension of the factored matrix.
    pub fn dim(&self) -> usize {
        self.l.nrows()
    }

    /// The lower-triangular factor `L`.
    pub fn factor_matrix(&self) -> &Matrix {
        &self.l
    }

    /// Solve `A x = b` by forward substitution on `L` then back substitution on `Lᵗ`.
    ///
    /// # Panics
    /// Panics if `b.len() != self.dim()`.
    pub fn solve(&self, b: &[f64]) -> Vec<f64> {
        let n = self.dim();
        assert_eq!(b.len(), n, "right-hand side has {} entries, expected {}", b.len(), n);

        // L z = b
        let mut z = vec![0.0; n];
        for i in 0..n {
            let mut sum = b[i];
            for k in 0..i {
                sum -= self.l[(i, k)] * z[k];
            }
            z[i] = sum / self.l[(i, i)];
        }

        // Lᵗ x = z
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = z[i];
            for k in (i + 1)..n {
                sum -= self.l[(k, i)] * x[k];
            }
            x[i] = sum / self.l[(i, i)];
        }

        x
    }

    /// `A⁻¹`, obtained by solving against each column of the identity.
    ///
    /// The result is symmetrized so that `inv[(i, j)] == inv[(j, i)]` exactly.
    pub fn inverse(&self) -> Matrix {
        let n = self.dim();
        let mut inv = Matrix::zeros(n, n);
        let mut e = vec![0.0; n];

        for col in 0..n {
            e.iter_mut().for_each(|v| *v = 0.0);
            e[col] = 1.0;
            let x = self.solve(&e);
            for (row, value) in x.into_iter().enumerate() {
                inv[(row, col)] = value;
            }
        }

        for i in 0..n {
            for j in 0..i {
                let avg = 0.5 * (inv[(i, j)] + inv[(j, i)]);
                inv[(i, j)] = avg;
                inv[(j, i)] = avg;
            }
        }

        inv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_RANK_TOLERANCE;

    fn spd() -> Matrix {
        Matrix::from_rows(&[[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]).unwrap()
    }

    #[test]
    fn test_factor_known_matrix() {
        // Classic example with L = [[2,0,0],[6,1,0],[-8,5,3]]
        let chol = Cholesky::factor(&spd(), 0.0).unwrap();
        let l = chol.factor_matrix();
        let expected = [[2.0, 0.0, 0.0], [6.0, 1.0, 0.0], [-8.0, 5.0, 3.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert!((l[(i, j)] - expected[i][j]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_solve() {
        let a = spd();
        let x_true = [1.0, -2.0, 0.5];
        let b = a.mul_vec(&x_true);
        let x = Cholesky::factor(&a, 0.0).unwrap().solve(&b);
        for i in 0..3 {
            assert!((x[i] - x_true[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_inverse() {
        let a = spd();
        let inv = Cholesky::factor(&a, 0.0).unwrap().inverse();
        assert!(inv.is_symmetric(0.0));
        for i in 0..3 {
            let col: Vec<f64> = (0..3).map(|k| inv[(k, i)]).collect();
            let prod = a.mul_vec(&col);
            for (j, v) in prod.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_singular_detected_by_pivot() {
        // second row is twice the first
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let err = Cholesky::factor(&a, 0.0).unwrap_err();
        assert!(matches!(err, LinalgError::RankDeficient { column: 1, .. }));
    }

    #[test]
    fn test_indefinite_rejected() {
        let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, -1.0]]).unwrap();
        assert!(matches!(
            Cholesky::factor(&a, 0.0),
            Err(LinalgError::RankDeficient { column: 1, .. })
        ));
    }

    #[test]
    fn test_nan_pivot_rejected() {
        let a = Matrix::from_rows(&[[f64::NAN]]).unwrap();
        assert!(matches!(
            Cholesky::factor(&a, 0.0),
            Err(LinalgError::RankDeficient { column: 0, .. })
        ));
    }

    #[test]
    fn test_small_pivot_relative_to_diagonal_accepted() {
        // Normal equations of an intercept and x = 1e6 + i, i in 0..20.
        // The second pivot is Σ(x - x̄)² = 665, tiny next to A[1][1] but well above round-off.
        let xs: Vec<f64> = (0..20).map(|i| 1e6 + i as f64).collect();
        let sx: f64 = xs.iter().sum();
        let sxx: f64 = xs.iter().map(|x| x * x).sum();
        let a = Matrix::from_rows(&[[20.0, sx], [sx, sxx]]).unwrap();

        let chol = Cholesky::factor(&a, DEFAULT_RANK_TOLERANCE).unwrap();
        let l11 = chol.factor_matrix()[(1, 1)];
        assert!((l11 * l11 - 665.0).abs() < 1.0);
    }

    #[test]
    fn test_rejection_reports_threshold() {
        let a = Matrix::from_rows(&[[4.0, 2.0], [2.0, 1.0 + 1e-12]]).unwrap();
        match Cholesky::factor(&a, 1e-9) {
            Err(LinalgError::RankDeficient { column, pivot, threshold }) => {
                assert_eq!(column, 1);
                assert!(pivot > 0.0);
                assert!(pivot <= threshold);
            }
            other => panic!("expected rank deficiency, got {:?}", other),
        }
    }

    #[test]
    fn test_not_square() {
        assert!(matches!(
            Cholesky::factor(&Matrix::zeros(2, 3), 0.0),
            Err(LinalgError::NotSquare { nrows: 2, ncols: 3 })
        ));
    }

    #[test]
    fn test_input_untouched() {
        let a = spd();
        let copy = a.clone();
        let _ = Cholesky::factor(&a, 0.0).unwrap();
        assert_eq!(a, copy);
    }
}

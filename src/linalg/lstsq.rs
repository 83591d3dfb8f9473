//! Weighted least squares through the normal equations.

use super::{Cholesky, LinalgError, Matrix};
use crate::core::DEFAULT_RANK_TOLERANCE;

/// Output of a weighted least-squares solve.
#[derive(Debug, Clone)]
pub struct LeastSquaresSolution {
    /// Solution `β` of `XᵗWX β = XᵗWy`, one entry per column of `X`.
    pub coefficients: Vec<f64>,
    /// `(XᵗWX)⁻¹ · chi2 / (n - p)`.
    pub covariance: Matrix,
    /// Weighted residual sum of squares `Σ wᵢ rᵢ²`.
    pub chi2: f64,
    /// Unweighted residuals `y - Xβ`.
    pub residuals: Vec<f64>,
    /// Fitted values `Xβ`.
    pub fitted_values: Vec<f64>,
}

/// Configurable weighted least-squares solver.
///
/// Solves `min Σ wᵢ (yᵢ - xᵢᵗβ)²` by forming `A = XᵗWX`, `b = XᵗWy` and factoring
/// `A` with Cholesky. Neither `X` nor `y` is modified.
#[derive(Debug, Clone, Copy)]
pub struct WeightedLeastSquares {
    rank_tolerance: f64,
}

impl Default for WeightedLeastSquares {
    fn default() -> Self {
        Self {
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
        }
    }
}

impl WeightedLeastSquares {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative pivot tolerance passed to [`Cholesky::factor`].
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.rank_tolerance = tol;
        self
    }

    /// Solve the weighted problem. `weights == None` means unit weights.
    pub fn solve(
        &self,
        x: &Matrix,
        y: &[f64],
        weights: Option<&[f64]>,
    ) -> Result<LeastSquaresSolution, LinalgError> {
        let (n, p) = x.shape();
        validate_inputs(x, y, weights)?;

        let weight = |i: usize| weights.map_or(1.0, |w| w[i]);

        // A = XᵗWX (lower triangle, mirrored), b = XᵗWy
        let mut a = Matrix::zeros(p, p);
        let mut b = vec![0.0; p];
        for (i, row) in x.rows().enumerate() {
            let wi = weight(i);
            for j in 0..p {
                let wx = wi * row[j];
                b[j] += wx * y[i];
                for k in 0..=j {
                    a[(j, k)] += wx * row[k];
                }
            }
        }
        for j in 0..p {
            for k in 0..j {
                a[(k, j)] = a[(j, k)];
            }
        }

        let chol = Cholesky::factor(&a, self.rank_tolerance)?;
        let coefficients = chol.solve(&b);

        let fitted_values = x.mul_vec(&coefficients);
        let residuals: Vec<f64> = y
            .iter()
            .zip(&fitted_values)
            .map(|(yi, fi)| yi - fi)
            .collect();
        let chi2: f64 = residuals
            .iter()
            .enumerate()
            .map(|(i, r)| weight(i) * r * r)
            .sum();

        let mut covariance = chol.inverse();
        covariance.scale(chi2 / (n - p) as f64);

        Ok(LeastSquaresSolution {
            coefficients,
            covariance,
            chi2,
            residuals,
            fitted_values,
        })
    }
}

/// Solve a weighted least-squares problem with the default rank tolerance.
pub fn solve_weighted_least_squares(
    x: &Matrix,
    y: &[f64],
    weights: Option<&[f64]>,
) -> Result<LeastSquaresSolution, LinalgError> {
    WeightedLeastSquares::default().solve(x, y, weights)
}

fn validate_inputs(x: &Matrix, y: &[f64], weights: Option<&[f64]>) -> Result<(), LinalgError> {
    let (n, p) = x.shape();

    if n != y.len() {
        return Err(LinalgError::DimensionMismatch {
            x_rows: n,
            y_len: y.len(),
        });
    }

    if let Some(w) = weights {
        if w.len() != n {
            return Err(LinalgError::WeightLengthMismatch {
                expected: n,
                got: w.len(),
            });
        }
        if let Some((index, &value)) = w
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(LinalgError::InvalidWeight { index, value });
        }
    }

    if let Some(index) = x.first_non_finite() {
        return Err(LinalgError::NonFinite { what: "X", index });
    }
    if let Some(index) = y.iter().position(|v| !v.is_finite()) {
        return Err(LinalgError::NonFinite { what: "y", index });
    }

    if n <= p {
        return Err(LinalgError::InsufficientObservations {
            n_observations: n,
            n_parameters: p,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design(xs: &[f64]) -> Matrix {
        Matrix::from_fn(xs.len(), 2, |i, j| if j == 0 { 1.0 } else { xs[i] })
    }

    #[test]
    fn test_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = xs.iter().map(|x| 2.0 + 3.0 * x).collect();
        let sol = solve_weighted_least_squares(&design(&xs), &y, None).unwrap();

        assert!((sol.coefficients[0] - 2.0).abs() < 1e-10);
        assert!((sol.coefficients[1] - 3.0).abs() < 1e-10);
        assert!(sol.chi2 < 1e-18);
        assert!(sol.residuals.iter().all(|r| r.abs() < 1e-10));
    }

    #[test]
    fn test_noisy_line_covariance() {
        // Closed form: Var(slope) = s² / Sxx, with s² = chi2 / (n - 2)
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.1, 3.9, 6.2, 7.8, 10.1];
        let sol = solve_weighted_least_squares(&design(&xs), &y, None).unwrap();

        let mean = 3.0;
        let sxx: f64 = xs.iter().map(|x| (x - mean) * (x - mean)).sum();
        let s2 = sol.chi2 / 3.0;
        assert!((sol.covariance[(1, 1)] - s2 / sxx).abs() < 1e-12);
        assert!(sol.covariance.is_symmetric(0.0));

        let rss: f64 = sol.residuals.iter().map(|r| r * r).sum();
        assert!((rss - sol.chi2).abs() < 1e-12);
    }

    #[test]
    fn test_unit_weights_match_unweighted() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [1.2, 1.9, 3.3, 3.8, 5.4, 5.9];
        let x = design(&xs);
        let plain = solve_weighted_least_squares(&x, &y, None).unwrap();
        let weighted = solve_weighted_least_squares(&x, &y, Some(&[1.0; 6])).unwrap();

        for j in 0..2 {
            assert!((plain.coefficients[j] - weighted.coefficients[j]).abs() < 1e-12);
        }
        assert!((plain.chi2 - weighted.chi2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_drops_observation() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y: Vec<f64> = xs.iter().map(|x| 1.0 + 2.0 * x).collect();
        y[2] = 100.0;
        let w = [1.0, 1.0, 0.0, 1.0, 1.0];
        let sol = solve_weighted_least_squares(&design(&xs), &y, Some(&w)).unwrap();

        assert!((sol.coefficients[0] - 1.0).abs() < 1e-10);
        assert!((sol.coefficients[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_collinear_rank_deficient() {
        let x = Matrix::from_fn(5, 3, |i, j| match j {
            0 => 1.0,
            1 => i as f64,
            _ => 2.0 * i as f64,
        });
        let y = [1.0, 2.0, 3.0, 4.0, 5.5];
        let err = solve_weighted_least_squares(&x, &y, None).unwrap_err();
        assert!(matches!(err, LinalgError::RankDeficient { column: 2, .. }));
    }

    #[test]
    fn test_n_equals_p_rejected() {
        let x = design(&[1.0, 2.0]);
        let err = solve_weighted_least_squares(&x, &[1.0, 2.0], None).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::InsufficientObservations {
                n_observations: 2,
                n_parameters: 2
            }
        ));
    }

    #[test]
    fn test_input_validation() {
        let x = design(&[1.0, 2.0, 3.0]);

        assert!(matches!(
            solve_weighted_least_squares(&x, &[1.0, 2.0], None),
            Err(LinalgError::DimensionMismatch { x_rows: 3, y_len: 2 })
        ));
        assert!(matches!(
            solve_weighted_least_squares(&x, &[1.0, 2.0, 3.0], Some(&[1.0, 1.0])),
            Err(LinalgError::WeightLengthMismatch { .. })
        ));
        assert!(matches!(
            solve_weighted_least_squares(&x, &[1.0, 2.0, 3.0], Some(&[1.0, -1.0, 1.0])),
            Err(LinalgError::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            solve_weighted_least_squares(&x, &[1.0, f64::NAN, 3.0], None),
            Err(LinalgError::NonFinite { what: "y", index: 1 })
        ));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let x = design(&[1.0, 2.0, 3.0, 4.0]);
        let y = vec![1.0, 3.0, 2.0, 5.0];
        let (x0, y0) = (x.clone(), y.clone());
        let _ = solve_weighted_least_squares(&x, &y, None).unwrap();
        assert_eq!(x, x0);
        assert_eq!(y, y0);
    }
}

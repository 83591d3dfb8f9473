//! Regression result structures.

use crate::linalg::{LeastSquaresSolution, Matrix};

/// Complete result from a least-squares fit.
///
/// Coefficients are stored as one vector with the intercept (when fitted) at
/// index 0. The covariance matrix and every per-coefficient statistic use the
/// same layout.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    full_coefficients: Vec<f64>,
    has_intercept: bool,
    covariance: Matrix,
    chi2: f64,
    residuals: Vec<f64>,
    fitted_values: Vec<f64>,

    // ========== Dimensions ==========
    n_observations: usize,
    n_parameters: usize,

    // ========== Fit Statistics ==========
    total_sum_of_squares: f64,
    weighted: bool,
}

impl RegressionResult {
    pub(crate) fn new(
        solution: LeastSquaresSolution,
        has_intercept: bool,
        total_sum_of_squares: f64,
        weighted: bool,
    ) -> Self {
        let n_observations = solution.residuals.len();
        let n_parameters = solution.coefficients.len();
        Self {
            full_coefficients: solution.coefficients,
            has_intercept,
            covariance: solution.covariance,
            chi2: solution.chi2,
            residuals: solution.residuals,
            fitted_values: solution.fitted_values,
            n_observations,
            n_parameters,
            total_sum_of_squares,
            weighted,
        }
    }

    /// Feature coefficients in column order, intercept excluded.
    pub fn coefficients(&self) -> &[f64] {
        let start = usize::from(self.has_intercept);
        &self.full_coefficients[start..]
    }

    /// Intercept, or `0.0` for a fit through the origin.
    pub fn intercept(&self) -> f64 {
        if self.has_intercept {
            self.full_coefficients[0]
        } else {
            0.0
        }
    }

    pub fn has_intercept(&self) -> bool {
        self.has_intercept
    }

    /// All estimated parameters, intercept first when present.
    pub fn full_coefficients(&self) -> &[f64] {
        &self.full_coefficients
    }

    /// `p × p` covariance of [`full_coefficients`](Self::full_coefficients).
    pub fn covariance(&self) -> &Matrix {
        &self.covariance
    }

    /// Weighted residual sum of squares.
    pub fn chi2(&self) -> f64 {
        self.chi2
    }

    /// `y - ŷ` on the training data (unweighted).
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted_values
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Number of estimated parameters, intercept included.
    pub fn n_parameters(&self) -> usize {
        self.n_parameters
    }

    /// Number of feature columns, intercept excluded.
    pub fn n_features(&self) -> usize {
        self.n_parameters - usize::from(self.has_intercept)
    }

    /// Residual degrees of freedom `n - p`.
    pub fn residual_df(&self) -> usize {
        self.n_observations - self.n_parameters
    }

    /// Model degrees of freedom: `p - 1` with an intercept, `p` without.
    pub fn model_df(&self) -> usize {
        self.n_features()
    }

    /// Total sum of squares `Σ (yᵢ - ȳ)²` of the original response, unweighted.
    pub fn total_sum_of_squares(&self) -> f64 {
        self.total_sum_of_squares
    }

    /// `1 - chi2 / TSS`.
    ///
    /// When `TSS == 0` this is `1.0` for a zero-residual fit and `0.0` otherwise.
    pub fn r_squared(&self) -> f64 {
        if self.total_sum_of_squares > 0.0 {
            1.0 - self.chi2 / self.total_sum_of_squares
        } else if self.chi2 == 0.0 {
            1.0
        } else {
            0.0
        }
    }

    /// `1 - (n - 1) / (n - p) · (1 - R²)`.
    pub fn adj_r_squared(&self) -> f64 {
        let n = self.n_observations as f64;
        let df = self.residual_df() as f64;
        1.0 - (n - 1.0) / df * (1.0 - self.r_squared())
    }

    /// Residual variance estimate `chi2 / (n - p)`.
    pub fn mse(&self) -> f64 {
        self.chi2 / self.residual_df() as f64
    }

    pub fn residual_standard_error(&self) -> f64 {
        self.mse().sqrt()
    }

    /// `√Cov[i][i]` for every parameter, intercept first when present.
    pub fn standard_errors(&self) -> Vec<f64> {
        self.covariance.diagonal().into_iter().map(f64::sqrt).collect()
    }

    /// Whether the fit used observation weights.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }
}

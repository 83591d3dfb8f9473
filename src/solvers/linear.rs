//! Ordinary and weighted least-squares regression.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::inference::{summarize, Summary};
use crate::linalg::{Matrix, WeightedLeastSquares};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::total_sum_of_squares;

/// Least-squares regression estimator, weighted or not.
///
/// Solves the weighted normal equations `XᵗWX β = XᵗWy` with a Cholesky
/// factorization. Without weights every observation has weight 1, which is
/// ordinary least squares. A rank-deficient design is an error; no column is
/// silently dropped.
///
/// # Example
///
/// ```
/// use lsq_inference::prelude::*;
///
/// let x = Matrix::from_fn(5, 1, |i, _| i as f64);
/// let y: Vec<f64> = (0..5).map(|i| 2.0 + 3.0 * i as f64 + 0.1 * (i % 2) as f64).collect();
///
/// let fitted = LinearRegressor::builder()
///     .with_intercept(true)
///     .build()
///     .fit(&x, &y)
///     .unwrap();
///
/// assert!((fitted.coefficients()[0] - 3.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearRegressor {
    options: RegressionOptions,
    weights: Option<Vec<f64>>,
}

impl LinearRegressor {
    /// Create a new regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self {
            options,
            weights: None,
        }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LinearRegressorBuilder {
        LinearRegressorBuilder::default()
    }

    /// Set the observation weights used by [`Regressor::fit`].
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Fit with explicit weights, ignoring any configured on the regressor.
    pub fn fit_with_weights(
        &self,
        x: &Matrix,
        y: &[f64],
        weights: Option<&[f64]>,
    ) -> Result<FittedLinear, RegressionError> {
        self.options.validate()?;

        let design = if self.options.with_intercept {
            x.with_intercept_column()
        } else {
            x.clone()
        };

        let solution = WeightedLeastSquares::new()
            .rank_tolerance(self.options.rank_tolerance)
            .solve(&design, y, weights)?;

        let tss = total_sum_of_squares(y);
        let result = RegressionResult::new(solution, self.options.with_intercept, tss, weights.is_some());

        log::debug!(
            "fitted {} least squares: n={}, p={}, chi2={:.6e}",
            if weights.is_some() { "weighted" } else { "ordinary" },
            result.n_observations(),
            result.n_parameters(),
            result.chi2()
        );

        Ok(FittedLinear {
            options: self.options.clone(),
            result,
        })
    }

    /// Fit from a sequence of feature rows. Ragged rows are rejected.
    pub fn fit_rows<R: AsRef<[f64]>>(
        &self,
        rows: &[R],
        y: &[f64],
    ) -> Result<FittedLinear, RegressionError> {
        let x = Matrix::from_rows(rows)?;
        self.fit(&x, y)
    }
}

impl Regressor for LinearRegressor {
    type Fitted = FittedLinear;

    fn fit(&self, x: &Matrix, y: &[f64]) -> Result<Self::Fitted, RegressionError> {
        self.fit_with_weights(x, y, self.weights.as_deref())
    }
}

/// Fit a least-squares model from feature rows in one call.
pub fn fit_linear<R: AsRef<[f64]>>(
    rows: &[R],
    y: &[f64],
    weights: Option<&[f64]>,
    fit_intercept: bool,
) -> Result<FittedLinear, RegressionError> {
    let x = Matrix::from_rows(rows)?;
    LinearRegressor::builder()
        .with_intercept(fit_intercept)
        .build()
        .fit_with_weights(&x, y, weights)
}

/// A fitted least-squares model. Immutable once built.
#[derive(Debug, Clone)]
pub struct FittedLinear {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedLinear {
    /// Prediction for a single feature row.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, RegressionError> {
        self.check_width(row.len())?;
        Ok(self.linear_predictor(row))
    }

    /// Predictions for a sequence of feature rows.
    pub fn predict_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vec<f64>, RegressionError> {
        rows.iter().map(|row| self.predict_row(row.as_ref())).collect()
    }

    /// Inference report with default coefficient names.
    pub fn summary(&self) -> Result<Summary, RegressionError> {
        summarize(self, None)
    }

    fn check_width(&self, got: usize) -> Result<(), RegressionError> {
        let expected = self.result.n_features();
        if got != expected {
            return Err(RegressionError::FeatureCountMismatch { expected, got });
        }
        Ok(())
    }

    fn linear_predictor(&self, row: &[f64]) -> f64 {
        self.result.intercept()
            + row
                .iter()
                .zip(self.result.coefficients())
                .map(|(x, b)| x * b)
                .sum::<f64>()
    }
}

impl FittedRegressor for FittedLinear {
    fn predict(&self, x: &Matrix) -> Result<Vec<f64>, RegressionError> {
        self.check_width(x.ncols())?;
        Ok(x.rows().map(|row| self.linear_predictor(row)).collect())
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }

    fn options(&self) -> &RegressionOptions {
        &self.options
    }
}

/// Builder for `LinearRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressorBuilder {
    builder: RegressionOptionsBuilder,
    weights: Option<Vec<f64>>,
}

impl LinearRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the observation weights.
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the relative Cholesky pivot tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Set the iteration cap for p-value computations.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.builder = self.builder.max_iterations(max_iter);
        self
    }

    /// Set the convergence tolerance for p-value computations.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.tolerance(tol);
        self
    }

    /// Build the regressor. Options are validated when fitting.
    pub fn build(self) -> LinearRegressor {
        let regressor = LinearRegressor::new(self.builder.build_unchecked());
        match self.weights {
            Some(w) => regressor.with_weights(w),
            None => regressor,
        }
    }
}

//! Core traits for regression estimators.

use crate::core::{ErrorKind, OptionsError, RegressionOptions, RegressionResult};
use crate::distributions::DistributionError;
use crate::linalg::{LinalgError, Matrix};
use crate::utils::total_sum_of_squares;
use thiserror::Error;

/// Errors that can occur during regression fitting and inference.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("feature count mismatch: model has {expected} features, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("degenerate fit: {0}")]
    DegenerateFit(&'static str),

    #[error("model has not been fitted")]
    NotFitted,
}

impl RegressionError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegressionError::Linalg(e) => e.kind(),
            RegressionError::Distribution(e) => e.kind(),
            RegressionError::InvalidOptions(e) => e.kind(),
            RegressionError::FeatureCountMismatch { .. } => ErrorKind::DimensionMismatch,
            RegressionError::DegenerateFit(_) => ErrorKind::DegenerateFit,
            RegressionError::NotFitted => ErrorKind::NotFitted,
        }
    }
}

/// A regression estimator that can be fit to data.
///
/// This trait follows the sklearn pattern where fitting returns a fitted model
/// that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features), without an intercept column
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Matrix, y: &[f64]) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Predict `intercept + Σ βⱼ xⱼ` for every row of `x`.
    ///
    /// Fails with `FeatureCountMismatch` when `x` has the wrong number of columns.
    fn predict(&self, x: &Matrix) -> Result<Vec<f64>, RegressionError>;

    /// Access the regression results (coefficients, covariance, chi2, etc.).
    fn result(&self) -> &RegressionResult;

    /// Options the model was fit with.
    fn options(&self) -> &RegressionOptions;

    /// Feature coefficients, intercept excluded.
    fn coefficients(&self) -> &[f64] {
        self.result().coefficients()
    }

    /// Intercept, `0.0` for a fit through the origin.
    fn intercept(&self) -> f64 {
        self.result().intercept()
    }

    fn r_squared(&self) -> f64 {
        self.result().r_squared()
    }

    /// Unweighted R² of the model's predictions on new data.
    fn score(&self, x: &Matrix, y: &[f64]) -> Result<f64, RegressionError> {
        if x.nrows() != y.len() {
            return Err(LinalgError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            }
            .into());
        }
        let predictions = self.predict(x)?;

        let tss = total_sum_of_squares(y);
        let rss: f64 = y
            .iter()
            .zip(&predictions)
            .map(|(yi, pi)| (yi - pi).powi(2))
            .sum();

        Ok(if tss == 0.0 {
            // Perfect prediction of constant target
            if rss == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - rss / tss
        })
    }
}

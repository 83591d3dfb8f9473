//! Stateful wrapper around [`LinearRegressor`] for callers that refit in place.

use crate::inference::{summarize, Summary};
use crate::linalg::Matrix;
use crate::solvers::linear::{FittedLinear, LinearRegressor};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};

/// A linear model that holds its most recent successful fit.
///
/// A refit that fails leaves the previous fit in place.
#[derive(Debug, Clone, Default)]
pub struct LinearModel {
    regressor: LinearRegressor,
    fitted: Option<FittedLinear>,
}

impl LinearModel {
    pub fn new(regressor: LinearRegressor) -> Self {
        Self {
            regressor,
            fitted: None,
        }
    }

    /// Fit with the regressor's configured weights (if any).
    pub fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<&FittedLinear, RegressionError> {
        let fitted = self.regressor.fit(x, y)?;
        Ok(self.fitted.insert(fitted))
    }

    /// Fit with explicit observation weights.
    pub fn fit_weighted(
        &mut self,
        x: &Matrix,
        y: &[f64],
        weights: &[f64],
    ) -> Result<&FittedLinear, RegressionError> {
        let fitted = self.regressor.fit_with_weights(x, y, Some(weights))?;
        Ok(self.fitted.insert(fitted))
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The current fit.
    pub fn fitted(&self) -> Result<&FittedLinear, RegressionError> {
        self.fitted.as_ref().ok_or(RegressionError::NotFitted)
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vec<f64>, RegressionError> {
        self.fitted()?.predict(x)
    }

    /// Inference report for the current fit.
    pub fn summary(&self, feature_names: Option<&[&str]>) -> Result<Summary, RegressionError> {
        summarize(self.fitted()?, feature_names)
    }
}

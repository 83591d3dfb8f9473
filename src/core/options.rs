//! Regression options and configuration.

use super::ErrorKind;
use crate::distributions::IncompleteBeta;
use thiserror::Error;

/// Default relative pivot tolerance for the Cholesky rank check.
///
/// A pivot within this many units of `A[j][j]` of zero cannot be told apart from
/// round-off in the normal equations.
pub const DEFAULT_RANK_TOLERANCE: f64 = 64.0 * f64::EPSILON;

/// Default iteration cap for the incomplete beta expansions.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default convergence epsilon for the incomplete beta expansions.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Configuration options for least-squares fits and their inference.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Whether to include an intercept term (default: true).
    pub with_intercept: bool,
    /// Relative tolerance for the Cholesky pivot check (default: `64·ε`).
    ///
    /// A pivot is rejected when `pivot <= rank_tolerance * A[j][j]`. Zero reduces
    /// the check to a plain sign test.
    pub rank_tolerance: f64,
    /// Maximum iterations for the special-function expansions used by inference.
    pub max_iterations: usize,
    /// Convergence tolerance for the special-function expansions.
    pub tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Errors that can occur when validating regression options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("rank_tolerance must be finite and non-negative, got {0}")]
    InvalidRankTolerance(f64),
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
    #[error("max_iterations must be at least 1, got {0}")]
    InvalidMaxIterations(usize),
}

impl OptionsError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Options for a fit through the origin.
    pub fn without_intercept() -> Self {
        Self {
            with_intercept: false,
            ..Default::default()
        }
    }

    /// Incomplete beta evaluator configured with these iteration settings.
    pub fn incomplete_beta(&self) -> IncompleteBeta {
        IncompleteBeta::new()
            .max_iterations(self.max_iterations)
            .epsilon(self.tolerance)
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.rank_tolerance.is_finite() || self.rank_tolerance < 0.0 {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        if !(self.tolerance > 0.0) {
            return Err(OptionsError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations < 1 {
            return Err(OptionsError::InvalidMaxIterations(self.max_iterations));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set the relative pivot tolerance for the rank check.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Set the maximum iterations for the special-function expansions.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.options.max_iterations = max_iter;
        self
    }

    /// Set the convergence tolerance for the special-function expansions.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.options.tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

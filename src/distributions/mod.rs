//! Special functions and the sampling distributions used for inference.
//!
//! Everything here is built on the regularized incomplete beta function
//! [`IncompleteBeta`]. The Student-t and F distribution functions reduce to it
//! through the usual change of variables.

mod beta;
mod fisher;
mod student_t;

pub use beta::{ln_beta, regularized_incomplete_beta, IncompleteBeta};
pub use fisher::{f_cdf, FisherSnedecor};
pub use student_t::{student_t_cdf, StudentT};

use crate::core::ErrorKind;
use thiserror::Error;

/// Errors from special-function evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("incomplete beta expansion did not converge within {iterations} iterations")]
    ConvergenceFailure { iterations: usize },
}

impl DistributionError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DistributionError::InvalidParameter { .. } => ErrorKind::InvalidInput,
            DistributionError::ConvergenceFailure { .. } => ErrorKind::ConvergenceFailure,
        }
    }
}

/// Reject NaN, infinite and non-positive shape or degrees-of-freedom parameters.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter { name, value })
    }
}

//! Dense linear algebra for least squares: row-major matrices, Cholesky
//! factorization and the weighted normal-equation solver.

mod cholesky;
mod lstsq;
mod matrix;

pub use cholesky::Cholesky;
pub use lstsq::{solve_weighted_least_squares, LeastSquaresSolution, WeightedLeastSquares};
pub use matrix::Matrix;

use crate::core::ErrorKind;
use thiserror::Error;

/// Errors raised while assembling or solving a least-squares system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("data length {got} does not match a {nrows}x{ncols} matrix")]
    DataLength {
        nrows: usize,
        ncols: usize,
        got: usize,
    },

    #[error("matrix must be square, got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("weights have {got} elements but y has {expected}")]
    WeightLengthMismatch { expected: usize, got: usize },

    #[error("invalid weights: weight {index} is {value}, all weights must be finite and non-negative")]
    InvalidWeight { index: usize, value: f64 },

    #[error("non-finite value in {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },

    #[error("insufficient observations: need more than {n_parameters}, got {n_observations}")]
    InsufficientObservations {
        n_observations: usize,
        n_parameters: usize,
    },

    #[error("matrix is rank deficient: pivot {pivot} at column {column} does not exceed {threshold}")]
    RankDeficient {
        column: usize,
        pivot: f64,
        threshold: f64,
    },
}

impl LinalgError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::RankDeficient { .. } => ErrorKind::RankDeficient,
            LinalgError::NonFinite { .. } => ErrorKind::InvalidInput,
            _ => ErrorKind::DimensionMismatch,
        }
    }
}

//! Core types for regression analysis.

mod kind;
mod options;
mod result;

pub use kind::ErrorKind;
pub use options::{
    OptionsError, RegressionOptions, RegressionOptionsBuilder, DEFAULT_MAX_ITERATIONS,
    DEFAULT_RANK_TOLERANCE, DEFAULT_TOLERANCE,
};
pub use result::RegressionResult;

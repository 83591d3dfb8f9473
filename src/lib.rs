//! Ordinary and weighted least-squares regression with statistical inference.
//!
//! This library fits linear models by solving the weighted normal equations with
//! a Cholesky factorization, and reports the usual inference for the fit:
//! standard errors, t-statistics, p-values, R², adjusted R² and the omnibus
//! F-test. The Student-t and F distribution functions are computed from a
//! regularized incomplete beta function implemented here. A deterministic
//! train/test splitter is included for preparing data upstream of a fit.
//!
//! # Example
//!
//! ```rust
//! use lsq_inference::prelude::*;
//!
//! let x = Matrix::from_fn(20, 1, |i, _| i as f64);
//! let y: Vec<f64> = (0..20)
//!     .map(|i| 1.0 + 0.5 * i as f64 + if i % 3 == 0 { 0.2 } else { -0.1 })
//!     .collect();
//!
//! // Fit with an intercept
//! let fitted = LinearRegressor::builder()
//!     .with_intercept(true)
//!     .build()
//!     .fit(&x, &y)
//!     .unwrap();
//!
//! // Inference report
//! let summary = summarize(&fitted, Some(&["slope_term"][..])).unwrap();
//! assert_eq!(summary.terms[0].name, "(Intercept)");
//! assert!(summary.r_squared > 0.99);
//!
//! // Predictions
//! let predictions = fitted.predict(&Matrix::from_rows(&[[25.0]]).unwrap()).unwrap();
//! assert_eq!(predictions.len(), 1);
//! ```

pub mod core;
pub mod distributions;
pub mod inference;
pub mod linalg;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ErrorKind, RegressionOptions, RegressionOptionsBuilder, RegressionResult,
    };
    pub use crate::distributions::{
        f_cdf, regularized_incomplete_beta, student_t_cdf, FisherSnedecor, StudentT,
    };
    pub use crate::inference::{
        coefficient_table, f_test, summarize, CoefficientSummary, FTest, Summary,
    };
    pub use crate::linalg::Matrix;
    pub use crate::solvers::{
        fit_linear, FittedLinear, FittedRegressor, LinearModel, LinearRegressor, RegressionError,
        Regressor,
    };
    pub use crate::utils::{split, DatasetSplitter, SplitLabels, SplitMode};
}

pub use crate::core::{ErrorKind, RegressionOptions, RegressionOptionsBuilder, RegressionResult};
pub use crate::linalg::Matrix;
pub use crate::solvers::{
    fit_linear, FittedLinear, FittedRegressor, LinearModel, LinearRegressor, RegressionError,
    Regressor,
};

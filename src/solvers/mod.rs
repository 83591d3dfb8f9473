//! Least-squares estimators.

mod linear;
mod model;
mod traits;

pub use linear::{fit_linear, FittedLinear, LinearRegressor, LinearRegressorBuilder};
pub use model::LinearModel;
pub use traits::{FittedRegressor, RegressionError, Regressor};

//! Statistical inference (standard errors, t-tests, F-test).

mod coefficient;
mod summary;

pub use coefficient::CoefficientInference;
pub use summary::{
    coefficient_table, f_test, summarize, CoefficientSummary, FTest, Summary, INTERCEPT_NAME,
};

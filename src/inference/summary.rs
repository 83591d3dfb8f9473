//! Inference report for a fitted least-squares model.

use super::CoefficientInference;
use crate::distributions::FisherSnedecor;
use crate::linalg::LinalgError;
use crate::solvers::{FittedRegressor, RegressionError};

/// Name used for the intercept term.
pub const INTERCEPT_NAME: &str = "(Intercept)";

/// One row of the coefficient table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSummary {
    pub name: String,
    pub estimate: f64,
    pub standard_error: f64,
    pub t_value: f64,
    pub p_value: f64,
}

/// Omnibus F-test of all regressors against the null model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTest {
    pub statistic: f64,
    pub p_value: f64,
    pub df_numerator: usize,
    pub df_denominator: usize,
}

/// Full inference report.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Coefficient rows, intercept first when the model has one.
    pub terms: Vec<CoefficientSummary>,
    pub has_intercept: bool,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub df_model: usize,
    pub df_residual: usize,
    pub n_observations: usize,
    pub residual_standard_error: f64,
}

impl Summary {
    /// The intercept row, if the model has one.
    pub fn intercept(&self) -> Option<&CoefficientSummary> {
        if self.has_intercept {
            self.terms.first()
        } else {
            None
        }
    }

    /// Rows for the feature coefficients only.
    pub fn features(&self) -> &[CoefficientSummary] {
        &self.terms[usize::from(self.has_intercept)..]
    }

    /// Look up a row by name.
    pub fn term(&self, name: &str) -> Option<&CoefficientSummary> {
        self.terms.iter().find(|t| t.name == name)
    }
}

/// Residual degrees of freedom, rejecting `n <= p`.
fn residual_df<M: FittedRegressor + ?Sized>(model: &M) -> Result<usize, RegressionError> {
    let result = model.result();
    let (n, p) = (result.n_observations(), result.n_parameters());
    if n <= p {
        return Err(LinalgError::InsufficientObservations {
            n_observations: n,
            n_parameters: p,
        }
        .into());
    }
    Ok(n - p)
}

fn coefficient_names<M: FittedRegressor + ?Sized>(
    model: &M,
    feature_names: Option<&[&str]>,
) -> Result<Vec<String>, RegressionError> {
    let result = model.result();
    let n_features = result.n_features();

    let features: Vec<String> = match feature_names {
        Some(names) if names.len() != n_features => {
            return Err(RegressionError::FeatureCountMismatch {
                expected: n_features,
                got: names.len(),
            });
        }
        Some(names) => names.iter().map(|s| s.to_string()).collect(),
        None => (1..=n_features).map(|j| format!("x{}", j)).collect(),
    };

    let mut names = Vec::with_capacity(result.n_parameters());
    if result.has_intercept() {
        names.push(INTERCEPT_NAME.to_string());
    }
    names.extend(features);
    Ok(names)
}

/// Per-coefficient estimate, standard error, t-value and two-sided p-value.
///
/// Unlike [`summarize`] this does not need a defined F-statistic, so it also
/// works on a perfect fit.
pub fn coefficient_table<M: FittedRegressor + ?Sized>(
    model: &M,
    feature_names: Option<&[&str]>,
) -> Result<Vec<CoefficientSummary>, RegressionError> {
    let df = residual_df(model)?;
    let names = coefficient_names(model, feature_names)?;
    let result = model.result();

    let estimates = result.full_coefficients();
    let std_errors = CoefficientInference::standard_errors(result.covariance());
    let t_values = CoefficientInference::t_statistics(estimates, &std_errors);
    let p_values =
        CoefficientInference::p_values(&t_values, df as f64, model.options().incomplete_beta())?;

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(i, name)| CoefficientSummary {
            name,
            estimate: estimates[i],
            standard_error: std_errors[i],
            t_value: t_values[i],
            p_value: p_values[i],
        })
        .collect())
}

/// Omnibus F-test `F = (R² / df_model) / ((1 - R²) / df_residual)`.
///
/// `df_model` is `p - 1` with an intercept and `p` without. Fails with
/// `DegenerateFit` when the statistic is undefined.
pub fn f_test<M: FittedRegressor + ?Sized>(model: &M) -> Result<FTest, RegressionError> {
    let df_residual = residual_df(model)?;
    let result = model.result();
    let df_model = result.model_df();

    if df_model == 0 {
        return Err(RegressionError::DegenerateFit("model has no regressors"));
    }
    if !(result.total_sum_of_squares() > 0.0) {
        return Err(RegressionError::DegenerateFit("response has zero total sum of squares"));
    }
    let r2 = result.r_squared();
    if r2 >= 1.0 {
        return Err(RegressionError::DegenerateFit("perfect fit"));
    }
    if r2 < 0.0 {
        return Err(RegressionError::DegenerateFit("R² is negative"));
    }

    let statistic = (r2 / df_model as f64) / ((1.0 - r2) / df_residual as f64);
    if !statistic.is_finite() {
        return Err(RegressionError::DegenerateFit("F-statistic is not finite"));
    }

    let p_value = FisherSnedecor::new(df_model as f64, df_residual as f64)?
        .with_evaluator(model.options().incomplete_beta())
        .sf(statistic)?;

    Ok(FTest {
        statistic,
        p_value,
        df_numerator: df_model,
        df_denominator: df_residual,
    })
}

/// Full inference report: coefficient table, R², adjusted R² and F-test.
///
/// # Errors
/// * `DimensionMismatch` kind when `n <= p`, checked first
/// * `FeatureCountMismatch` when `feature_names` has the wrong length
/// * `DegenerateFit` for a perfect fit, a constant response or a model without regressors
pub fn summarize<M: FittedRegressor + ?Sized>(
    model: &M,
    feature_names: Option<&[&str]>,
) -> Result<Summary, RegressionError> {
    // coefficient_table checks n > p before anything else
    let terms = coefficient_table(model, feature_names)?;
    let f = f_test(model)?;
    let result = model.result();

    Ok(Summary {
        terms,
        has_intercept: result.has_intercept(),
        r_squared: result.r_squared(),
        adjusted_r_squared: result.adj_r_squared(),
        f_statistic: f.statistic,
        f_p_value: f.p_value,
        df_model: f.df_numerator,
        df_residual: f.df_denominator,
        n_observations: result.n_observations(),
        residual_standard_error: result.residual_standard_error(),
    })
}

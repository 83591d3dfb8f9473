//! Coefficient inference calculations.

use crate::distributions::{DistributionError, IncompleteBeta, StudentT};
use crate::linalg::Matrix;

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard errors from the coefficient covariance.
    ///
    /// SE(β_j) = sqrt(Cov_{jj})
    pub fn standard_errors(covariance: &Matrix) -> Vec<f64> {
        covariance.diagonal().into_iter().map(f64::sqrt).collect()
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j). A zero standard error gives an infinite statistic.
    pub fn t_statistics(coefficients: &[f64], std_errors: &[f64]) -> Vec<f64> {
        coefficients
            .iter()
            .zip(std_errors)
            .map(|(b, se)| b / se)
            .collect()
    }

    /// Compute two-sided p-values from t-statistics.
    ///
    /// p_j = 2 * P(T > |t_j|) where T ~ t(df). NaN statistics map to NaN p-values.
    pub fn p_values(
        t_statistics: &[f64],
        df: f64,
        beta: IncompleteBeta,
    ) -> Result<Vec<f64>, DistributionError> {
        let t_dist = StudentT::new(df)?.with_evaluator(beta);

        t_statistics
            .iter()
            .map(|&t| {
                if t.is_nan() {
                    Ok(f64::NAN)
                } else {
                    t_dist.two_tailed_p_value(t)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_errors() {
        let cov = Matrix::from_rows(&[[4.0, 0.3], [0.3, 0.25]]).unwrap();
        assert_eq!(CoefficientInference::standard_errors(&cov), vec![2.0, 0.5]);
    }

    #[test]
    fn test_t_statistics() {
        let coefficients = [1.0, 2.0, 3.0];
        let std_errors = [0.5; 3];

        let t_stats = CoefficientInference::t_statistics(&coefficients, &std_errors);

        assert!((t_stats[0] - 2.0).abs() < 1e-10);
        assert!((t_stats[1] - 4.0).abs() < 1e-10);
        assert!((t_stats[2] - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_standard_error() {
        let t_stats = CoefficientInference::t_statistics(&[2.0, 0.0], &[0.0, 0.0]);
        assert_eq!(t_stats[0], f64::INFINITY);
        assert!(t_stats[1].is_nan());

        let p = CoefficientInference::p_values(&t_stats, 5.0, IncompleteBeta::default()).unwrap();
        assert_eq!(p[0], 0.0);
        assert!(p[1].is_nan());
    }

    #[test]
    fn test_p_values_bounds() {
        let t_stats = [1.0, -2.0, 3.0];
        let p_vals = CoefficientInference::p_values(&t_stats, 10.0, IncompleteBeta::default()).unwrap();

        for p in &p_vals {
            assert!(*p >= 0.0 && *p <= 1.0);
        }
        assert!(p_vals[0] > p_vals[1] && p_vals[1] > p_vals[2]);
    }

    #[test]
    fn test_p_values_invalid_df() {
        assert!(CoefficientInference::p_values(&[1.0], 0.0, IncompleteBeta::default()).is_err());
    }
}

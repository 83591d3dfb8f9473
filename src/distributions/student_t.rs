//! Student's t distribution.

use super::{check_positive, DistributionError, IncompleteBeta};

/// Student's t distribution with `df` degrees of freedom.
///
/// The distribution function reduces to the incomplete beta:
///
/// ```text
/// P(T > |t|) = ½ · I_{df/(df+t²)}(df/2, ½)
/// ```
///
/// # Examples
///
/// ```
/// use lsq_inference::distributions::StudentT;
///
/// let t = StudentT::new(10.0).unwrap();
/// assert!((t.cdf(0.0).unwrap() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    df: f64,
    beta: IncompleteBeta,
}

impl StudentT {
    /// Create a t distribution. `df` must be finite and positive.
    pub fn new(df: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            df: check_positive("df", df)?,
            beta: IncompleteBeta::default(),
        })
    }

    /// Use a specific incomplete beta evaluator (iteration cap, epsilon).
    pub fn with_evaluator(mut self, beta: IncompleteBeta) -> Self {
        self.beta = beta;
        self
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.df
    }

    /// `P(T > |t|)`, evaluated without forming `1 - cdf`.
    fn upper_tail(&self, t: f64) -> Result<f64, DistributionError> {
        if t.is_nan() {
            return Err(DistributionError::InvalidParameter { name: "t", value: t });
        }
        let t2 = t * t;
        if t2.is_infinite() {
            return Ok(0.0);
        }
        let x = self.df / (self.df + t2);
        let y = t2 / (self.df + t2);
        Ok(0.5 * self.beta.evaluate_with_complement(x, y, 0.5 * self.df, 0.5)?)
    }

    /// `P(T <= t)`.
    pub fn cdf(&self, t: f64) -> Result<f64, DistributionError> {
        let tail = self.upper_tail(t)?;
        Ok(if t >= 0.0 { 1.0 - tail } else { tail })
    }

    /// `P(T > t)`.
    pub fn sf(&self, t: f64) -> Result<f64, DistributionError> {
        let tail = self.upper_tail(t)?;
        Ok(if t >= 0.0 { tail } else { 1.0 - tail })
    }

    /// `P(|T| >= |t|) = 2 · P(T > |t|)`.
    pub fn two_tailed_p_value(&self, t: f64) -> Result<f64, DistributionError> {
        Ok((2.0 * self.upper_tail(t)?).min(1.0))
    }
}

/// `P(T <= t)` for a t distribution with `df` degrees of freedom.
pub fn student_t_cdf(t: f64, df: f64) -> Result<f64, DistributionError> {
    StudentT::new(df)?.cdf(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_center() {
        for &df in &[0.5, 1.0, 7.0, 1e4] {
            assert_abs_diff_eq!(student_t_cdf(0.0, df).unwrap(), 0.5, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_cauchy_case() {
        // df = 1 is the Cauchy distribution
        for &t in &[-20.0_f64, -1.0, 0.3, 2.5, 100.0] {
            let expected = 0.5 + t.atan() / PI;
            assert_abs_diff_eq!(student_t_cdf(t, 1.0).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_df_two_closed_form() {
        for &t in &[-3.0_f64, -0.5, 0.7, 4.0] {
            let expected = 0.5 + t / (2.0 * (2.0 + t * t).sqrt());
            assert_abs_diff_eq!(student_t_cdf(t, 2.0).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symmetry_and_sf() {
        let dist = StudentT::new(13.0).unwrap();
        for &t in &[0.1, 1.0, 2.2, 6.0] {
            let upper = dist.cdf(t).unwrap();
            let lower = dist.cdf(-t).unwrap();
            assert_abs_diff_eq!(upper + lower, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(dist.sf(t).unwrap(), lower, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_infinite_t() {
        let dist = StudentT::new(4.0).unwrap();
        assert_eq!(dist.cdf(f64::INFINITY).unwrap(), 1.0);
        assert_eq!(dist.cdf(f64::NEG_INFINITY).unwrap(), 0.0);
        assert_eq!(dist.two_tailed_p_value(f64::INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn test_two_tailed_p_value() {
        let dist = StudentT::new(1.0).unwrap();
        // P(|T| > 1) = 0.5 for Cauchy
        assert_abs_diff_eq!(dist.two_tailed_p_value(1.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dist.two_tailed_p_value(-1.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_eq!(dist.two_tailed_p_value(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-3.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
        assert!(matches!(
            student_t_cdf(f64::NAN, 5.0),
            Err(DistributionError::InvalidParameter { name: "t", .. })
        ));
    }
}

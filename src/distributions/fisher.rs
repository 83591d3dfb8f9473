//! Fisher-Snedecor F distribution.

use super::{check_positive, DistributionError, IncompleteBeta};

/// F distribution with `(d1, d2)` degrees of freedom.
///
/// `P(F <= f) = I_{d1·f/(d1·f+d2)}(d1/2, d2/2)`.
#[derive(Debug, Clone, Copy)]
pub struct FisherSnedecor {
    d1: f64,
    d2: f64,
    beta: IncompleteBeta,
}

impl FisherSnedecor {
    /// Create an F distribution. Both degrees of freedom must be finite and positive.
    pub fn new(d1: f64, d2: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            d1: check_positive("d1", d1)?,
            d2: check_positive("d2", d2)?,
            beta: IncompleteBeta::default(),
        })
    }

    pub fn with_evaluator(mut self, beta: IncompleteBeta) -> Self {
        self.beta = beta;
        self
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Beta argument and its complement, or `None` when `f` is effectively infinite.
    fn transform(&self, f: f64) -> Result<Option<(f64, f64)>, DistributionError> {
        if f.is_nan() || f < 0.0 {
            return Err(DistributionError::InvalidParameter { name: "f", value: f });
        }
        let d1f = self.d1 * f;
        if d1f.is_infinite() {
            return Ok(None);
        }
        let denom = d1f + self.d2;
        Ok(Some((d1f / denom, self.d2 / denom)))
    }

    /// `P(F <= f)`.
    pub fn cdf(&self, f: f64) -> Result<f64, DistributionError> {
        match self.transform(f)? {
            None => Ok(1.0),
            Some((x, y)) => self
                .beta
                .evaluate_with_complement(x, y, 0.5 * self.d1, 0.5 * self.d2),
        }
    }

    /// `P(F > f)`, computed as `I_{d2/(d1·f+d2)}(d2/2, d1/2)`.
    pub fn sf(&self, f: f64) -> Result<f64, DistributionError> {
        match self.transform(f)? {
            None => Ok(0.0),
            Some((x, y)) => self
                .beta
                .evaluate_with_complement(y, x, 0.5 * self.d2, 0.5 * self.d1),
        }
    }
}

/// `P(F <= f)` for an F distribution with `(d1, d2)` degrees of freedom.
pub fn f_cdf(f: f64, d1: f64, d2: f64) -> Result<f64, DistributionError> {
    FisherSnedecor::new(d1, d2)?.cdf(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_and_infinity() {
        let dist = FisherSnedecor::new(3.0, 12.0).unwrap();
        assert_eq!(dist.cdf(0.0).unwrap(), 0.0);
        assert_eq!(dist.sf(0.0).unwrap(), 1.0);
        assert_eq!(dist.cdf(f64::INFINITY).unwrap(), 1.0);
        assert_eq!(dist.sf(f64::INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn test_d1_two_closed_form() {
        // d1 = 2: P(F <= f) = 1 - (d2 / (d2 + 2f))^(d2/2)
        for &d2 in &[3.0_f64, 10.0, 40.0] {
            for &f in &[0.2_f64, 1.0, 3.5, 12.0] {
                let expected: f64 = 1.0 - (d2 / (d2 + 2.0 * f)).powf(d2 / 2.0);
                assert_abs_diff_eq!(f_cdf(f, 2.0, d2).unwrap(), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cdf_plus_sf() {
        let dist = FisherSnedecor::new(4.0, 25.0).unwrap();
        for &f in &[0.05, 0.9, 2.7, 15.0] {
            assert_abs_diff_eq!(dist.cdf(f).unwrap() + dist.sf(f).unwrap(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sf_keeps_small_tail() {
        // P(F > 14662.5) on (1, 18): far below what 1 - cdf can resolve
        let dist = FisherSnedecor::new(1.0, 18.0).unwrap();
        let p = dist.sf(14662.512467465243).unwrap();
        assert!(p > 0.0 && p < 1e-25);
    }

    #[test]
    fn test_invalid() {
        assert!(FisherSnedecor::new(0.0, 1.0).is_err());
        assert!(FisherSnedecor::new(1.0, f64::INFINITY).is_err());
        assert!(matches!(
            f_cdf(-1.0, 2.0, 3.0),
            Err(DistributionError::InvalidParameter { name: "f", .. })
        ));
        assert!(f_cdf(f64::NAN, 2.0, 3.0).is_err());
    }
}

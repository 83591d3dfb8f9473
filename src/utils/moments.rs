//! Moments of a response vector.

/// Arithmetic mean. `0.0` for an empty slice.
pub fn mean(y: &[f64]) -> f64 {
    if y.is_empty() {
        0.0
    } else {
        y.iter().sum::<f64>() / y.len() as f64
    }
}

/// Total sum of squares `Σ (yᵢ - ȳ)²` about the plain mean.
///
/// Observation weights play no part here, so a weighted fit's R² compares its
/// weighted chi2 against the spread of the original response.
pub fn total_sum_of_squares(y: &[f64]) -> f64 {
    let m = mean(y);
    y.iter().map(|yi| (yi - m) * (yi - m)).sum()
}

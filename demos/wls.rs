//! # Weighted Least Squares (WLS) Regression
//!
//! Down-weights noisy observations. With weights `1/σᵢ²` the estimates are
//! efficient under heteroscedastic errors.
//!
//! Run with: `cargo run --example wls`

use lsq_inference::prelude::*;

fn main() {
    println!("=== Weighted Least Squares (WLS) Regression ===\n");

    heteroscedastic();
    zero_weights();
}

/// Error spread grows with x; weight by 1/x²
fn heteroscedastic() {
    println!("--- Heteroscedastic Errors ---\n");

    let n = 40;
    let x = Matrix::from_fn(n, 1, |i, _| (i + 1) as f64);
    let y: Vec<f64> = (0..n)
        .map(|i| {
            let xi = (i + 1) as f64;
            1.0 + 1.5 * xi + 0.3 * xi * ((i as f64) * 2.1).sin()
        })
        .collect();
    let weights: Vec<f64> = (1..=n).map(|i| 1.0 / (i * i) as f64).collect();

    let ols = LinearRegressor::default()
        .fit(&x, &y)
        .expect("OLS fit should succeed");
    let wls = LinearRegressor::builder()
        .weights(weights)
        .build()
        .fit(&x, &y)
        .expect("WLS fit should succeed");

    println!("True model: y = 1 + 1.5*x, noise sd proportional to x\n");
    println!("{:<6} {:>10} {:>10} {:>10}", "Fit", "Intercept", "Slope", "SE(slope)");
    println!("{}", "-".repeat(39));
    for (name, fitted) in [("OLS", &ols), ("WLS", &wls)] {
        println!(
            "{:<6} {:>10.4} {:>10.4} {:>10.4}",
            name,
            fitted.intercept(),
            fitted.coefficients()[0],
            fitted.result().standard_errors()[1]
        );
    }

    let summary = wls.summary().expect("summary should succeed");
    println!(
        "\nWLS R-squared: {:.4}, F = {:.1}, p = {:.3e}",
        summary.r_squared, summary.f_statistic, summary.f_p_value
    );
    println!();
}

/// A zero weight removes a row from the fit without deleting it
fn zero_weights() {
    println!("--- Zero Weights ---\n");

    let x = Matrix::from_fn(12, 1, |i, _| i as f64);
    let mut y: Vec<f64> = (0..12).map(|i| 4.0 - 0.5 * i as f64).collect();
    y[6] = 100.0;
    let mut weights = vec![1.0; 12];
    weights[6] = 0.0;

    let fitted = LinearRegressor::default()
        .fit_with_weights(&x, &y, Some(&weights))
        .expect("fit should succeed");
    println!("Outlier at row 6 given weight 0");
    println!(
        "Intercept {:.4}, slope {:.4}",
        fitted.intercept(),
        fitted.coefficients()[0]
    );

    match LinearRegressor::default().fit_with_weights(&x, &y, Some(&[1.0; 5])) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Short weight vector is rejected: {e}"),
    }
}

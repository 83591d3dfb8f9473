//! # Ordinary Least Squares (OLS) Regression
//!
//! Fits `y = Xβ + ε` by Cholesky on the normal equations and reports the
//! coefficient table with t-tests, R² and the omnibus F-test.
//!
//! Run with: `cargo run --example ols`

use faer::Mat;
use lsq_inference::prelude::*;

fn main() {
    println!("=== Ordinary Least Squares (OLS) Regression ===\n");

    simple_regression();
    multiple_regression();
    prediction();
}

/// Simple linear regression with one predictor
fn simple_regression() {
    println!("--- Simple Linear Regression ---\n");

    // y = 2 + 3*x + noise
    let noise = [
        0.5, -0.3, 0.8, -0.2, 0.1, -0.6, 0.4, -0.1, 0.3, -0.5, 0.2, -0.4, 0.6, -0.3, 0.1, -0.2,
        0.4, -0.5, 0.3, -0.1, 0.5, -0.3, 0.2, -0.4, 0.1, -0.6, 0.4, -0.2, 0.3, -0.5,
    ];
    let rows: Vec<[f64; 1]> = (0..noise.len()).map(|i| [i as f64 * 0.2]).collect();
    let y: Vec<f64> = rows
        .iter()
        .zip(noise)
        .map(|(row, e)| 2.0 + 3.0 * row[0] + e)
        .collect();

    let fitted = fit_linear(&rows, &y, None, true).expect("fit should succeed");

    println!("True model: y = 2 + 3*x + noise");
    println!("Estimated intercept: {:.4}", fitted.intercept());
    println!("Estimated slope: {:.4}", fitted.coefficients()[0]);
    println!("R-squared: {:.4}", fitted.r_squared());
    println!("Adjusted R-squared: {:.4}", fitted.result().adj_r_squared());
    println!();
}

/// Multiple regression from a faer matrix, with the full inference report
fn multiple_regression() {
    println!("--- Multiple Linear Regression ---\n");

    // y = 1 + 2*x1 - 0.5*x2 + 0.8*x3 + noise
    let n = 100;
    let x = Mat::from_fn(n, 3, |i, j| match j {
        0 => (i as f64) * 0.1,
        1 => ((i as f64) * 0.15).sin(),
        _ => ((i as f64) * 0.05).powi(2),
    });
    let y: Vec<f64> = (0..n)
        .map(|i| {
            let noise = ((i as f64 * 0.7).sin()) * 0.3;
            1.0 + 2.0 * x[(i, 0)] - 0.5 * x[(i, 1)] + 0.8 * x[(i, 2)] + noise
        })
        .collect();

    let x = Matrix::from(&x);
    let fitted = LinearRegressor::default()
        .fit(&x, &y)
        .expect("fit should succeed");
    let summary = summarize(&fitted, Some(&["x1", "x2", "x3"][..])).expect("summary should succeed");

    println!("True model: y = 1 + 2*x1 - 0.5*x2 + 0.8*x3 + noise\n");
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>12}",
        "Term", "Estimate", "SE", "t value", "Pr(>|t|)"
    );
    println!("{}", "-".repeat(58));
    for term in &summary.terms {
        println!(
            "{:<12} {:>10.4} {:>10.4} {:>10.3} {:>12.3e}",
            term.name, term.estimate, term.standard_error, term.t_value, term.p_value
        );
    }

    println!("\nResidual standard error: {:.4} on {} degrees of freedom",
        summary.residual_standard_error, summary.df_residual);
    println!(
        "R-squared: {:.4}, Adjusted R-squared: {:.4}",
        summary.r_squared, summary.adjusted_r_squared
    );
    println!(
        "F-statistic: {:.2} on {} and {} DF, p-value: {:.3e}",
        summary.f_statistic, summary.df_model, summary.df_residual, summary.f_p_value
    );
    println!();
}

/// Predict on new rows and refit in place with `LinearModel`
fn prediction() {
    println!("--- Prediction ---\n");

    let x = Matrix::from_fn(30, 1, |i, _| i as f64);
    let y: Vec<f64> = (0..30)
        .map(|i| 5.0 + 2.0 * i as f64 + ((i as f64) * 1.3).cos() * 0.4)
        .collect();

    let mut model = LinearModel::default();
    model.fit(&x, &y).expect("fit should succeed");

    let x_new = Matrix::from_fn(5, 1, |i, _| (30 + i * 2) as f64);
    let predictions = model.predict(&x_new).expect("widths match");

    println!("{:>6} {:>10}", "x", "Fitted");
    println!("{}", "-".repeat(17));
    for (row, fit) in x_new.rows().zip(&predictions) {
        println!("{:>6.0} {:>10.3}", row[0], fit);
    }

    match model.predict(&Matrix::zeros(1, 2)) {
        Ok(_) => println!("\nunexpected success"),
        Err(e) => println!("\nWrong width is rejected: {e} ({:?})", e.kind()),
    }
    println!();
}

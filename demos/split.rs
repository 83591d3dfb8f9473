//! # Train/Test Split
//!
//! Labels rows as train or test, either by a seeded random draw or by
//! keeping the original order, then scores a model on held-out rows.
//!
//! Run with: `cargo run --example split`

use lsq_inference::prelude::*;

fn main() {
    println!("=== Train/Test Split ===\n");

    let chronological = split(10, 0.7, SplitMode::Chronological, None).expect("valid fraction");
    println!("Chronological 70%: {:?}", chronological.as_slice());

    let random = DatasetSplitter::new()
        .seed(42)
        .split(10, 0.7)
        .expect("valid fraction");
    println!("Random 70% (seed 42): train rows {:?}\n", random.train_indices());

    holdout_score();
}

/// Fit on the training rows and score R² on the test rows
fn holdout_score() {
    println!("--- Holdout Score ---\n");

    let n = 200;
    let rows: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let t = i as f64 / 10.0;
            [t, (t * 0.7).cos()]
        })
        .collect();
    let y: Vec<f64> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| 0.5 + 1.2 * r[0] - 2.0 * r[1] + ((i as f64) * 3.7).sin() * 0.4)
        .collect();

    let labels = DatasetSplitter::new().seed(7).split(n, 0.8).expect("valid fraction");
    let (train_rows, test_rows) = labels.partition(&rows).expect("lengths match");
    let (train_y, test_y) = labels.partition(&y).expect("lengths match");

    let fitted = LinearRegressor::default()
        .fit_rows(&train_rows, &train_y)
        .expect("fit should succeed");
    let test_x = Matrix::from_rows(&test_rows).expect("rows are rectangular");

    println!("Train rows: {}, test rows: {}", labels.n_train(), labels.n_test());
    println!("Train R-squared: {:.4}", fitted.r_squared());
    println!(
        "Test R-squared:  {:.4}",
        fitted.score(&test_x, &test_y).expect("score should succeed")
    );
}

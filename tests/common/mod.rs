//! Common test utilities and data generators.
#![allow(dead_code)]

use lsq_inference::linalg::Matrix;

/// Generate simple linear data: y = x * beta + intercept + noise
///
/// True coefficients are `1, 2, ..., n_features`.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Matrix, Vec<f64>, Vec<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let true_coefficients: Vec<f64> = (1..=n_features).map(|j| j as f64).collect();
    let mut x = Matrix::zeros(n_samples, n_features);
    let mut y = vec![0.0; n_samples];

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_coefficients[j];
        }
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Generate data with collinear features (column 1 is twice column 0).
pub fn generate_collinear_data(n_samples: usize) -> (Matrix, Vec<f64>) {
    let x = Matrix::from_fn(n_samples, 3, |i, j| match j {
        0 => i as f64,
        1 => 2.0 * i as f64,
        _ => (i * i) as f64,
    });
    let y = (0..n_samples)
        .map(|i| 1.0 + 2.0 * i as f64 + 3.0 * (i * i) as f64)
        .collect();
    (x, y)
}

/// Generate data with a constant column, which is collinear with the intercept.
pub fn generate_constant_column_data(n_samples: usize) -> (Matrix, Vec<f64>) {
    let x = Matrix::from_fn(n_samples, 3, |i, j| match j {
        0 => i as f64,
        1 => 5.0,
        _ => (i * 2) as f64 + ((i * 3) % 4) as f64,
    });
    let y = (0..n_samples)
        .map(|i| 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)])
        .collect();
    (x, y)
}

/// Simple linear regression data from R.
/// R: set.seed(42); n=20; x=1:20; y=2.5+3*x+rnorm(n,sd=0.5); lm(y~x)
pub fn r_dataset_simple() -> (Matrix, Vec<f64>) {
    let y = vec![
        6.1854792236,
        8.2176509143,
        11.6815642057,
        14.8164313025,
        17.7021341616,
        20.4469377420,
        24.2557609987,
        26.4526704808,
        30.5092118569,
        32.4686429505,
        36.1524348271,
        39.6433226964,
        40.8055696494,
        44.3606056166,
        47.4333393318,
        50.8179751990,
        53.3578735393,
        55.1717722895,
        58.2797665357,
        63.1600566729,
    ];
    let x = Matrix::from_fn(20, 1, |i, _| (i + 1) as f64);
    (x, y)
}

/// Heteroscedastic data from R, fit with 1/x² weights.
pub fn r_dataset_weighted() -> (Matrix, Vec<f64>, Vec<f64>) {
    let y = vec![
        3.6370958447,
        4.8870603657,
        6.6089385234,
        8.2531450420,
        9.7021341616,
        10.9363252903,
        13.5580653982,
        13.9242727693,
        17.3165813425,
        16.9372859009,
        19.9353566196,
        22.7439744712,
        19.6944810886,
        22.6096957265,
        24.3000179954,
        27.0175206369,
        27.0167700336,
        24.2183802424,
        25.8631128357,
        34.6402266915,
        32.8560589524,
        31.0811214452,
        36.1045900818,
        40.9152192780,
        44.2379836532,
        39.8807802578,
        41.8053726665,
        39.0631433615,
        46.8342823290,
        45.0800153721,
    ];
    let x = Matrix::from_fn(30, 1, |i, _| (i + 1) as f64);
    let w = (1..=30).map(|i| 1.0 / (i * i) as f64).collect();
    (x, y, w)
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

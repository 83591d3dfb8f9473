//! Train/test partitioning of row indices.

use crate::core::ErrorKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// How rows are ordered before the first `train_size` are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Order by an independent uniform draw per row.
    #[default]
    Random,
    /// Keep the original row order; the training set is a prefix.
    Chronological,
}

/// Errors from dataset splitting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    #[error("train fraction must lie in [0, 1], got {0}")]
    InvalidFraction(f64),

    #[error("labels cover {expected} rows but {got} were supplied")]
    LengthMismatch { expected: usize, got: usize },
}

impl SplitError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::InvalidFraction(_) => ErrorKind::InvalidInput,
            SplitError::LengthMismatch { .. } => ErrorKind::DimensionMismatch,
        }
    }
}

/// Per-row train/test assignment in original row order. `true` marks a training row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLabels(Vec<bool>);

impl SplitLabels {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }

    /// Whether row `i` is in the training set.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn is_train(&self, i: usize) -> bool {
        self.0[i]
    }

    pub fn n_train(&self) -> usize {
        self.0.iter().filter(|&&t| t).count()
    }

    pub fn n_test(&self) -> usize {
        self.len() - self.n_train()
    }

    /// Indices of training rows, ascending.
    pub fn train_indices(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Indices of test rows, ascending.
    pub fn test_indices(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    fn indices_where(&self, flag: bool) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| (t == flag).then_some(i))
            .collect()
    }

    /// Split `rows` into `(train, test)` following these labels.
    pub fn partition<T: Clone>(&self, rows: &[T]) -> Result<(Vec<T>, Vec<T>), SplitError> {
        if rows.len() != self.len() {
            return Err(SplitError::LengthMismatch {
                expected: self.len(),
                got: rows.len(),
            });
        }
        let mut train = Vec::with_capacity(self.n_train());
        let mut test = Vec::with_capacity(self.n_test());
        for (row, &is_train) in rows.iter().zip(&self.0) {
            if is_train {
                train.push(row.clone());
            } else {
                test.push(row.clone());
            }
        }
        Ok((train, test))
    }
}

/// Number of training rows for `row_count` rows at `train_fraction`.
///
/// `ceil(f·n)` when `f >= 0.5`, `floor(f·n)` otherwise. A product within `1e-9·n`
/// of an integer is taken as that integer first, so `0.7 × 10` yields 7.
pub fn train_size(row_count: usize, train_fraction: f64) -> Result<usize, SplitError> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(SplitError::InvalidFraction(train_fraction));
    }

    let n = row_count as f64;
    let raw = train_fraction * n;
    let nearest = raw.round();
    let raw = if (raw - nearest).abs() <= 1e-9 * n.max(1.0) {
        nearest
    } else {
        raw
    };

    let size = if train_fraction >= 0.5 {
        raw.ceil()
    } else {
        raw.floor()
    };
    Ok((size as usize).min(row_count))
}

/// Configured splitter.
///
/// # Example
///
/// ```
/// use lsq_inference::utils::{DatasetSplitter, SplitMode};
///
/// let labels = DatasetSplitter::new()
///     .mode(SplitMode::Chronological)
///     .split(10, 0.7)
///     .unwrap();
/// assert_eq!(labels.train_indices(), vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetSplitter {
    mode: SplitMode,
    seed: Option<u64>,
}

impl DatasetSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seed for [`SplitMode::Random`]. Without one the generator is seeded from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Label `row_count` rows with a `train_fraction` share marked as training.
    pub fn split(&self, row_count: usize, train_fraction: f64) -> Result<SplitLabels, SplitError> {
        let n_train = train_size(row_count, train_fraction)?;

        let keys: Vec<f64> = match self.mode {
            SplitMode::Chronological => (0..row_count)
                .map(|i| i as f64 / row_count as f64)
                .collect(),
            SplitMode::Random => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                (0..row_count).map(|_| rng.random::<f64>()).collect()
            }
        };

        let mut order: Vec<usize> = (0..row_count).collect();
        order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));

        let mut labels = vec![false; row_count];
        for &row in &order[..n_train] {
            labels[row] = true;
        }

        log::debug!(
            "split {} rows ({:?}): {} train, {} test",
            row_count,
            self.mode,
            n_train,
            row_count - n_train
        );

        Ok(SplitLabels(labels))
    }
}

/// Label rows as train or test. See [`DatasetSplitter`].
pub fn split(
    row_count: usize,
    train_fraction: f64,
    mode: SplitMode,
    seed: Option<u64>,
) -> Result<SplitLabels, SplitError> {
    let splitter = DatasetSplitter::new().mode(mode);
    let splitter = match seed {
        Some(seed) => splitter.seed(seed),
        None => splitter,
    };
    splitter.split(row_count, train_fraction)
}

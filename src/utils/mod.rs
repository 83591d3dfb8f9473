//! Utilities shared around the fitting core.

mod moments;
mod split;

pub use moments::{mean, total_sum_of_squares};
pub use split::{split, train_size, DatasetSplitter, SplitError, SplitLabels, SplitMode};

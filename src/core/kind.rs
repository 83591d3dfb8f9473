//! Error categories shared by every error type in the crate.

/// Broad category of a failure.
///
/// Each concrete error enum (`LinalgError`, `DistributionError`, `RegressionError`)
/// reports one of these through its `kind()` method, so callers can branch on the
/// category without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Row, length or weight inconsistencies, or too few degrees of freedom.
    DimensionMismatch,
    /// Collinear or under-determined design matrix (non-positive Cholesky pivot).
    RankDeficient,
    /// Perfect or otherwise degenerate fit where the F-statistic is undefined.
    DegenerateFit,
    /// A special-function expansion exceeded its iteration cap.
    ConvergenceFailure,
    /// Argument outside its mathematical domain (NaN, negative shape, bad option).
    InvalidInput,
    /// A stateful model was queried before a successful fit.
    NotFitted,
}

use thiserror::Error;

/// 曲線建構與求值的錯誤。
///
/// `OutOfRange` 屬於求值時的 domain error，其餘皆為建構時的前置條件違反。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("point out of range [{min}, {max}]: {point}")]
    OutOfRange { point: f64, min: f64, max: f64 },

    #[error("points and values must have the same length ({points} != {values})")]
    LengthMismatch { points: usize, values: usize },

    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("points must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },

    #[error("non-finite input at index {index}")]
    NonFinite { index: usize },
}

use crate::math::curve::curveerror::CurveError;

/// 一維曲線。求值範圍外的點回傳 `CurveError::OutOfRange`。
pub trait Curve: Send + Sync {
    fn value(&self, x: f64) -> Result<f64, CurveError>;

    fn derivative(&self, x: f64) -> Result<f64, CurveError>;
}

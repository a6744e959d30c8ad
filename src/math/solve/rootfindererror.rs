use thiserror::Error;

/// Root finder 的前置條件錯誤。
///
/// 注意：達到迭代上限「不是」錯誤，見 `RootSolution::converged`。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFinderError {
    #[error("interval endpoints must be finite: [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("f(a) and f(b) must have opposite signs: f({a}) = {fa}, f({b}) = {fb}")]
    NotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("function returned a non-finite value at x = {x}")]
    NonFiniteValue { x: f64 },
}

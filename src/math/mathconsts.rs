//! 數值常數，供 root finder 與曲線共用。

/// Double precision 的機器精度（unit roundoff，2^-53）
pub const MACH_EPS: f64 = 1.11022302462515654042e-16;

/// 2^-52，1.0 與下一個可表示 double 的距離
pub const EPS_INV: f64 = 2.22044604925031308085e-16;

/// 4.450147717014403e-308（= 2 x `f64::MIN_POSITIVE`）
///
/// 函數值絕對值小於等於此值即視為零。
pub const MIN_VAL: f64 = 2.0 * f64::MIN_POSITIVE;

/// 5.218048215738236e-15（= 45 x `MACH_EPS` + `EPS_INV`）
///
/// Root finder 可接受的最小 tolerance，呼叫端給更小的值會被靜默提高至此。
pub const MIN_TOL: f64 = 45.0 * MACH_EPS + EPS_INV;

/// Brent-Dekker 的預設迭代上限
pub const DEFAULT_MAX_ITERATIONS: usize = 150;

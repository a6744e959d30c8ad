use serde::Deserialize;

use crate::math::function::scalarfunction::ScalarFunction;
use crate::math::mathconsts::{
    DEFAULT_MAX_ITERATIONS,
    EPS_INV,
    MIN_TOL,
    MIN_VAL
};
use crate::math::solve::rootfindererror::RootFinderError;

/// Brent-Dekker 的設定。
///
/// 預設值沿用舊版的數值慣例：
/// - `min_tolerance`：呼叫端給的 tolerance 小於此值時「靜默」提高，不回報錯誤
/// - `zero_threshold`：|f(x)| 小於等於此值即視為已找到根；收斂時若 |x| 小於等於此值，
///   回傳恰好 `0.0` 而非 x 本身
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RootFinderConfig {
    pub max_iterations: usize,
    pub min_tolerance: f64,
    pub zero_threshold: f64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        RootFinderConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_tolerance: MIN_TOL,
            zero_threshold: MIN_VAL,
        }
    }
}

/// 一次求根的結果。
///
/// `converged == false` 代表迭代次數用盡，`root` 只是目前最好的估計值。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSolution {
    pub root: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl RootSolution {
    fn converged_at(root: f64, iterations: usize) -> RootSolution {
        RootSolution { root, iterations, converged: true }
    }
}

/// 三值 sign：0 對應 0（`f64::signum(0.0)` 是 1.0，不能直接用）
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// ─────────────────────────────────────────────
// RootFinder
// ─────────────────────────────────────────────
//
// Brent-Dekker：inverse quadratic interpolation / secant / bisection 混合。
//
// 維護三個點：
//   b：目前的最佳估計
//   a：上一步的 b
//   c：與 b 異號的點，[b, c] 恆包含根
// 內插步長只有在落於 b 與 (b+c)/2 之間、且比前前一步縮得夠快時才接受，
// 否則改用二分法，因此 bracket 必定收斂。

/// 不持有任何可變狀態，同一個 `RootFinder` 可在多執行緒間共用。
#[derive(Debug, Clone, Copy, Default)]
pub struct RootFinder {
    config: RootFinderConfig,
}

impl RootFinder {
    pub fn new(config: RootFinderConfig) -> RootFinder {
        RootFinder { config }
    }

    pub fn config(&self) -> &RootFinderConfig {
        &self.config
    }

    /// 在 [a, b] 內找 f 的根，精度約為 `tolerance`。
    ///
    /// 迭代上限用盡時「不」回傳錯誤，而是回傳最後的估計值；
    /// 需要分辨是否收斂請用 [`RootFinder::solve`]。
    pub fn find_root<F>(&self, a: f64, b: f64, f: &F, tolerance: f64) -> Result<f64, RootFinderError>
    where
        F: ScalarFunction + ?Sized,
    {
        self.solve(a, b, f, tolerance).map(|solution| solution.root)
    }

    pub fn solve<F>(&self, a: f64, b: f64, f: &F, tolerance: f64) -> Result<RootSolution, RootFinderError>
    where
        F: ScalarFunction + ?Sized,
    {
        if !a.is_finite() || !b.is_finite() {
            return Err(RootFinderError::InvalidInterval { a, b });
        }

        let zero = self.config.zero_threshold;
        let (mut a, mut b) = if b < a { (b, a) } else { (a, b) };
        // NaN 或過小的 tolerance 一律提高到下限
        let tol = if tolerance >= self.config.min_tolerance {
            tolerance
        } else {
            self.config.min_tolerance
        };

        let mut fa = evaluate(f, a)?;
        if fa.abs() <= zero {
            return Ok(RootSolution::converged_at(a, 0));
        }
        let mut fb = evaluate(f, b)?;
        if fb.abs() <= zero {
            return Ok(RootSolution::converged_at(b, 0));
        }
        if sign(fa) == sign(fb) {
            return Err(RootFinderError::NotBracketed { a, b, fa, fb });
        }

        let mut c = a;
        let mut fc = fa;
        let mut e = b - a;
        let mut d = e;

        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        for iteration in 0..self.config.max_iterations {
            let tol2 = tol + 4.0 * EPS_INV * b.abs();
            let xm = 0.5 * (c - b);

            if fb.abs() <= zero {
                return Ok(RootSolution::converged_at(b, iteration));
            }
            if xm.abs() <= tol2 {
                let root = if b.abs() > zero { b } else { 0.0 };
                return Ok(RootSolution::converged_at(root, iteration));
            }

            if e.abs() >= tol2 && fa.abs() > fb.abs() {
                let (p, mut q) = if a != c {
                    // inverse quadratic interpolation
                    let q = fa / fc;
                    let r = fb / fc;
                    let s = fb / fa;
                    (
                        s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                        (q - 1.0) * (r - 1.0) * (s - 1.0),
                    )
                } else {
                    // secant
                    let s = fb / fa;
                    (2.0 * xm * s, 1.0 - s)
                };

                if p > 0.0 {
                    q = -q;
                }
                let p = p.abs();

                if 2.0 * p >= 3.0 * xm * q - (tol2 * q).abs() || p >= (0.5 * e * q).abs() {
                    d = xm;
                    e = d;
                } else {
                    e = d;
                    d = p / q;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;
            if d.abs() > tol2 {
                b += d;
            } else if xm < 0.0 {
                b -= tol2;
            } else {
                b += tol2;
            }
            fb = evaluate(f, b)?;

            if fb * sign(fc) > 0.0 {
                c = a;
                fc = fa;
                e = b - a;
                d = e;
            } else {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }
        }

        Ok(RootSolution {
            root: b,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }
}

fn evaluate<F>(f: &F, x: f64) -> Result<f64, RootFinderError>
where
    F: ScalarFunction + ?Sized,
{
    let y = f.apply(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(RootFinderError::NonFiniteValue { x })
    }
}

/// 以預設設定執行 Brent-Dekker。
pub fn brent_dekker<F>(a: f64, b: f64, f: &F, tolerance: f64) -> Result<f64, RootFinderError>
where
    F: ScalarFunction + ?Sized,
{
    RootFinder::default().find_root(a, b, f, tolerance)
}

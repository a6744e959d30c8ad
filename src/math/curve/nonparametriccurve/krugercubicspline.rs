use crate::math::curve::curveerror::CurveError;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::{
    validate_samples,
    PiecewisePolynomial,
    SplineBuilder,
    SplineType,
    Subpolynomial
};

// ─────────────────────────────────────────────
// Kruger constrained cubic spline
// ─────────────────────────────────────────────
//
// C. J. C. Kruger, "Constrained Cubic Spline Interpolation for Chemical Engineering Applications"
//
// 不建立聯立方程組；各節點的一階導數 f1[i] 直接由相鄰割線斜率決定：
//   若 dy[i-1]*dy[i] > 0：f1[i] = 2 / (dx[i]/dy[i] + dx[i-1]/dy[i-1])（調和平均）
//   否則（局部極值）：    f1[i] = 0
// 端點使用單側外推：
//   f1[0] = 3*dy[0]/(2*dx[0]) - f1[1]/2
//   f1[n] = 3*dy[n-1]/(2*dx[n-1]) - f1[n-1]/2
//
// 犧牲節點上的 C² 連續性換取不 overshoot：單調資料產生單調曲線。
//
// 係數以全域座標 x 表示（origin = 0.0），與 natural cubic spline 的區間局部座標不同。

pub struct ConstrainedCubicSplineBuilder;

impl SplineBuilder for ConstrainedCubicSplineBuilder {
    fn spline_type(&self) -> SplineType {
        SplineType::KrugerCubic
    }

    fn build(&self, points: &[f64], values: &[f64]) -> Result<PiecewisePolynomial, CurveError> {
        validate_samples(self.spline_type(), points, values)?;
        let subpolynomial_list = generate_kruger_cubic_coef_list(points, values);
        Ok(PiecewisePolynomial::from_parts(
            self.spline_type(),
            points.to_vec(),
            subpolynomial_list,
        ))
    }
}

/// 各節點的一階導數 f1[0..=n]
fn kruger_slopes(dx: &[f64], dy: &[f64]) -> Vec<f64> {
    let n = dx.len();
    let mut f1 = vec![0.0_f64; n + 1];

    for i in 1..n {
        if dy[i - 1] * dy[i] > 0.0 {
            f1[i] = 2.0 / (dx[i] / dy[i] + dx[i - 1] / dy[i - 1]);
        }
    }

    f1[0] = 3.0 * dy[0] / (2.0 * dx[0]) - f1[1] / 2.0;
    f1[n] = 3.0 * dy[n - 1] / (2.0 * dx[n - 1]) - f1[n - 1] / 2.0;
    f1
}

fn generate_kruger_cubic_coef_list(points: &[f64], values: &[f64]) -> Vec<Subpolynomial> {
    let n = points.len() - 1;
    let dx: Vec<f64> = (0..n).map(|i| points[i + 1] - points[i]).collect();
    let dy: Vec<f64> = (0..n).map(|i| values[i + 1] - values[i]).collect();
    let f1 = kruger_slopes(&dx, &dy);

    (1..=n)
        .map(|i| {
            let h = dx[i - 1];
            let x0 = points[i - 1];
            let x1 = points[i];

            // 區間兩端的二階導數
            let f2a = -2.0 * (f1[i] + 2.0 * f1[i - 1]) / h + 6.0 * dy[i - 1] / (h * h);
            let f2b = 2.0 * (2.0 * f1[i] + f1[i - 1]) / h - 6.0 * dy[i - 1] / (h * h);

            let d = (f2b - f2a) / (6.0 * h);
            let c = (x1 * f2a - x0 * f2b) / (2.0 * h);
            let b = (dy[i - 1]
                     - c * (x1 * x1 - x0 * x0)
                     - d * (x1 * x1 * x1 - x0 * x0 * x0)) / h;
            let a = values[i - 1] - b * x0 - c * x0 * x0 - d * x0 * x0 * x0;
            Subpolynomial::new(a, b, c, d, 0.0)
        })
        .collect()
}

use crate::math::curve::curveerror::CurveError;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::{
    validate_samples,
    PiecewisePolynomial,
    SplineBuilder,
    SplineType,
    Subpolynomial
};

// ─────────────────────────────────────────────
// Natural cubic spline
// ─────────────────────────────────────────────
//
// 以 c[i]（= 二階導數 / 2）為未知數，內部方程式由 C² 連續性導出：
//   h[i-1]*c[i-1] + 2*(h[i-1]+h[i])*c[i] + h[i]*c[i+1]
//     = 3*( (y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1] )
// 邊界 c[0] = c[n] = 0。
//
// 矩陣為三對角且嚴格對角優勢（節點嚴格遞增時），
// 因此一次前向消去加回代即可，不需要 pivoting。
//
// 各段以區間局部座標 t = x - x[i] 表示，a[i] 直接取 y[i]。

pub struct NaturalCubicSplineBuilder;

impl SplineBuilder for NaturalCubicSplineBuilder {
    fn spline_type(&self) -> SplineType {
        SplineType::NaturalCubic
    }

    fn build(&self, points: &[f64], values: &[f64]) -> Result<PiecewisePolynomial, CurveError> {
        validate_samples(self.spline_type(), points, values)?;
        let subpolynomial_list = generate_natural_cubic_coef_list(points, values);
        Ok(PiecewisePolynomial::from_parts(
            self.spline_type(),
            points.to_vec(),
            subpolynomial_list,
        ))
    }
}

fn generate_natural_cubic_coef_list(points: &[f64], values: &[f64]) -> Vec<Subpolynomial> {
    // 區間數；節點數為 n + 1
    let n = points.len() - 1;
    let h: Vec<f64> = (0..n).map(|i| points[i + 1] - points[i]).collect();

    // 前向消去：mu[0] = 0, z[0] = 0
    let mut mu = vec![0.0_f64; n];
    let mut z = vec![0.0_f64; n + 1];
    for i in 1..n {
        let g = 2.0 * (points[i + 1] - points[i - 1]) - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / g;
        z[i] = (3.0 * (values[i + 1] * h[i - 1]
                     - values[i] * (points[i + 1] - points[i - 1])
                     + values[i - 1] * h[i])
                / (h[i - 1] * h[i])
              - h[i - 1] * z[i - 1]) / g;
    }

    // 回代：z[n] = 0, c[n] = 0
    let mut b = vec![0.0_f64; n];
    let mut c = vec![0.0_f64; n + 1];
    let mut d = vec![0.0_f64; n];
    for j in (0..n).rev() {
        c[j] = z[j] - mu[j] * c[j + 1];
        b[j] = (values[j + 1] - values[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
        d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
    }

    (0..n)
        .map(|i| Subpolynomial::new(values[i], b[i], c[i], d[i], points[i]))
        .collect()
}

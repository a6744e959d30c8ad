use std::cmp::Ordering;

use serde::Deserialize;

use crate::math::curve::curve::Curve;
use crate::math::curve::curveerror::CurveError;
use crate::math::curve::nonparametriccurve::krugercubicspline::ConstrainedCubicSplineBuilder;
use crate::math::curve::nonparametriccurve::naturalcubicspline::NaturalCubicSplineBuilder;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};

// ─────────────────────────────────────────────
// Subpolynomial
// ─────────────────────────────────────────────
//
// 每段三次多項式存成 [a, b, c, d]，代表
//   S_i(x) = a + b*t + c*t^2 + d*t^3,  t = x - origin
//
// Natural cubic spline 的 origin 是左端節點 x_i（區間局部座標）；
// Kruger 的係數直接以全域 x 表示，origin 為 0.0。

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subpolynomial {
    coefs: [f64; 4],
    origin: f64,
}

impl Subpolynomial {
    pub fn new(a: f64, b: f64, c: f64, d: f64, origin: f64) -> Subpolynomial {
        Subpolynomial { coefs: [a, b, c, d], origin }
    }

    /// [a, b, c, d]
    pub fn coefficients(&self) -> [f64; 4] {
        self.coefs
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Horner: ((d*t + c)*t + b)*t + a
    pub fn value(&self, x: f64) -> f64 {
        let [a, b, c, d] = self.coefs;
        let t = x - self.origin;
        d.mul_add(t, c).mul_add(t, b).mul_add(t, a)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let [_, b, c, d] = self.coefs;
        let t = x - self.origin;
        (3.0 * d).mul_add(t, 2.0 * c).mul_add(t, b)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let [_, _, c, d] = self.coefs;
        let t = x - self.origin;
        (6.0 * d).mul_add(t, 2.0 * c)
    }
}

// ─────────────────────────────────────────────
// SplineType
// ─────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum SplineType {
    /// 兩端二階導數為 0，內部節點 C² 連續
    NaturalCubic,
    /// Kruger constrained cubic spline：不 overshoot，局部極值處斜率為 0
    KrugerCubic,
}

impl SplineType {
    pub fn necessary_points(&self) -> usize {
        match self {
            SplineType::NaturalCubic => 2, // 2點退化為線性
            SplineType::KrugerCubic  => 2,
        }
    }
}

/// 由樣本點建構 `PiecewisePolynomial` 的演算法
pub trait SplineBuilder {
    fn spline_type(&self) -> SplineType;

    fn build(&self, points: &[f64], values: &[f64]) -> Result<PiecewisePolynomial, CurveError>;
}

/// 檢查樣本：長度一致、點數足夠、全部有限、節點嚴格遞增。
pub(crate) fn validate_samples(
    spline_type: SplineType,
    points: &[f64],
    values: &[f64],
) -> Result<(), CurveError> {
    if points.len() != values.len() {
        return Err(CurveError::LengthMismatch {
            points: points.len(),
            values: values.len(),
        });
    }

    let required = spline_type.necessary_points();
    if points.len() < required {
        return Err(CurveError::TooFewPoints {
            required,
            actual: points.len(),
        });
    }

    if let Some(index) = points
        .iter()
        .zip(values.iter())
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(CurveError::NonFinite { index });
    }

    match points.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(CurveError::NotStrictlyIncreasing { index: i + 1 }),
        None => Ok(()),
    }
}

// ─────────────────────────────────────────────
// PiecewisePolynomial
// ─────────────────────────────────────────────

/// n+1 個節點、n 段三次多項式。建構後不可變，可跨執行緒共享讀取。
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial {
    spline_type: SplineType,
    knots: Vec<f64>,
    subpolynomial_list: Vec<Subpolynomial>,
}

impl PiecewisePolynomial {
    pub fn new(
        spline_type: SplineType,
        points: &[f64],
        values: &[f64],
    ) -> Result<PiecewisePolynomial, CurveError> {
        match spline_type {
            SplineType::NaturalCubic => NaturalCubicSplineBuilder.build(points, values),
            SplineType::KrugerCubic  => ConstrainedCubicSplineBuilder.build(points, values),
        }
    }

    /// `subpolynomial_list.len()` 必須等於 `knots.len() - 1`
    pub(crate) fn from_parts(
        spline_type: SplineType,
        knots: Vec<f64>,
        subpolynomial_list: Vec<Subpolynomial>,
    ) -> PiecewisePolynomial {
        debug_assert_eq!(knots.len(), subpolynomial_list.len() + 1);
        PiecewisePolynomial { spline_type, knots, subpolynomial_list }
    }

    pub fn spline_type(&self) -> SplineType {
        self.spline_type
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn subpolynomials(&self) -> &[Subpolynomial] {
        &self.subpolynomial_list
    }

    /// 找出 x 所在的區間。
    ///
    /// 恰好落在節點 i 上時用第 i 段；最後一個節點沒有從它開始的區段，改用最後一段。
    pub fn find_segment(&self, x: f64) -> Result<usize, CurveError> {
        let min = self.min_x();
        let max = self.max_x();
        if !(x >= min && x <= max) {
            return Err(CurveError::OutOfRange { point: x, min, max });
        }

        let i = match self
            .knots
            .binary_search_by(|k| k.partial_cmp(&x).unwrap_or(Ordering::Less))
        {
            Ok(i) => i,
            Err(insertion_point) => insertion_point.saturating_sub(1),
        };
        Ok(i.min(self.subpolynomial_list.len() - 1))
    }

    pub fn second_derivative(&self, x: f64) -> Result<f64, CurveError> {
        let i = self.find_segment(x)?;
        Ok(self.subpolynomial_list[i].second_derivative(x))
    }
}

// ─────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────

impl NonparametricCurve for PiecewisePolynomial {
    fn points(&self) -> Vec<Point2D> {
        let mut pts: Vec<Point2D> = self
            .subpolynomial_list
            .iter()
            .zip(self.knots.iter())
            .map(|(s, &x)| Point2D::new(x, s.value(x)))
            .collect();
        let max_x = self.max_x();
        let last = &self.subpolynomial_list[self.subpolynomial_list.len() - 1];
        pts.push(Point2D::new(max_x, last.value(max_x)));
        pts
    }

    fn min_x(&self) -> f64 {
        self.knots[0]
    }

    fn max_x(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }
}

impl Curve for PiecewisePolynomial {
    fn value(&self, x: f64) -> Result<f64, CurveError> {
        let i = self.find_segment(x)?;
        Ok(self.subpolynomial_list[i].value(x))
    }

    fn derivative(&self, x: f64) -> Result<f64, CurveError> {
        let i = self.find_segment(x)?;
        Ok(self.subpolynomial_list[i].derivative(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // y = x^2 on [0, 1] and y = 1 + 2(x-1) on [1, 3]
    fn sample() -> PiecewisePolynomial {
        PiecewisePolynomial::from_parts(
            SplineType::NaturalCubic,
            vec![0.0, 1.0, 3.0],
            vec![
                Subpolynomial::new(0.0, 0.0, 1.0, 0.0, 0.0),
                Subpolynomial::new(1.0, 2.0, 0.0, 0.0, 1.0),
            ],
        )
    }

    #[test]
    fn test_find_segment() {
        let pp = sample();
        assert_eq!(pp.find_segment(0.0), Ok(0));
        assert_eq!(pp.find_segment(0.5), Ok(0));
        assert_eq!(pp.find_segment(1.0), Ok(1));
        assert_eq!(pp.find_segment(2.9), Ok(1));
        // last knot clamps to the last segment
        assert_eq!(pp.find_segment(3.0), Ok(1));
    }

    #[test]
    fn test_out_of_range() {
        let pp = sample();
        assert_eq!(
            pp.value(3.5),
            Err(CurveError::OutOfRange { point: 3.5, min: 0.0, max: 3.0 })
        );
        assert!(pp.value(-1e-12).is_err());
        assert!(pp.derivative(f64::NAN).is_err());
        assert!(pp.second_derivative(f64::INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = sample().value(4.0).unwrap_err();
        assert_eq!(err.to_string(), "point out of range [0, 3]: 4");
    }

    #[test]
    fn test_evaluation_uses_origin() {
        let pp = sample();
        assert_eq!(pp.value(0.5).unwrap(), 0.25);
        assert_eq!(pp.value(2.0).unwrap(), 3.0);
        assert_eq!(pp.value(3.0).unwrap(), 5.0);
        assert_eq!(pp.derivative(0.5).unwrap(), 1.0);
        assert_eq!(pp.derivative(2.0).unwrap(), 2.0);
        assert_eq!(pp.second_derivative(0.25).unwrap(), 2.0);
        assert_eq!(pp.second_derivative(2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_horner_rounds_once_per_step() {
        // b * t = 1 + 2^-29 + 2^-60 exactly; an unfused product drops 2^-60
        let b = 1.0 + 2.0_f64.powi(-30);
        let s = Subpolynomial::new(-1.0, b, 0.0, 0.0, 0.0);
        assert_eq!(s.value(b), 2.0_f64.powi(-29) + 2.0_f64.powi(-60));
    }

    #[test]
    fn test_negative_zero_query() {
        let pp = sample();
        assert_eq!(pp.value(-0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_points() {
        let pts = sample().points();
        assert_eq!(
            pts,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(3.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_validate_samples() {
        let t = SplineType::NaturalCubic;
        assert_eq!(validate_samples(t, &[0.0, 1.0], &[1.0, 2.0]), Ok(()));
        assert_eq!(
            validate_samples(t, &[0.0, 1.0, 2.0], &[1.0, 2.0]),
            Err(CurveError::LengthMismatch { points: 3, values: 2 })
        );
        assert_eq!(
            validate_samples(t, &[0.0], &[1.0]),
            Err(CurveError::TooFewPoints { required: 2, actual: 1 })
        );
        assert_eq!(
            validate_samples(t, &[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(CurveError::NotStrictlyIncreasing { index: 2 })
        );
        assert_eq!(
            validate_samples(t, &[0.0, 2.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(CurveError::NotStrictlyIncreasing { index: 2 })
        );
        assert_eq!(
            validate_samples(t, &[0.0, 1.0, 2.0], &[1.0, f64::NAN, 3.0]),
            Err(CurveError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PiecewisePolynomial>();
    }
}

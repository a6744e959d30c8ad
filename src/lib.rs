//! 數值工具：Brent-Dekker 求根與一維分段三次樣條插值。
//!
//! - [`RootFinder`]：在 bracket 內求連續函數的根
//! - [`PiecewisePolynomial`]：由 [`NaturalCubicSplineBuilder`] 或
//!   [`ConstrainedCubicSplineBuilder`]（Kruger）建構的分段三次多項式
//!
//! ```
//! use numfit::{brent_dekker, Curve, PiecewisePolynomial, SplineType};
//!
//! let root = brent_dekker(0.0, 2.0, &|x: f64| x * x - 2.0, 1e-10).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//!
//! let spline = PiecewisePolynomial::new(
//!     SplineType::NaturalCubic,
//!     &[0.0, 1.0, 2.0],
//!     &[0.0, 1.0, 0.0],
//! ).unwrap();
//! assert_eq!(spline.value(1.0).unwrap(), 1.0);
//! ```

pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod mathconsts;

    pub mod function {
        pub mod scalarfunction;
    }

    pub mod curve {
        pub mod curve;
        pub mod curveerror;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod piecewisepolynomial;
            pub mod naturalcubicspline;
            pub mod krugercubicspline;
            pub mod curvemanager;
        }
    }

    pub mod solve {
        pub mod rootfinder;
        pub mod rootfindererror;
    }
}

pub use math::curve::curve::Curve;
pub use math::curve::curveerror::CurveError;
pub use math::curve::nonparametriccurve::krugercubicspline::ConstrainedCubicSplineBuilder;
pub use math::curve::nonparametriccurve::naturalcubicspline::NaturalCubicSplineBuilder;
pub use math::curve::nonparametriccurve::nonparametriccurve::{NonparametricCurve, Point2D};
pub use math::curve::nonparametriccurve::piecewisepolynomial::{
    PiecewisePolynomial,
    SplineBuilder,
    SplineType,
    Subpolynomial
};
pub use math::function::scalarfunction::ScalarFunction;
pub use math::solve::rootfinder::{brent_dekker, RootFinder, RootFinderConfig, RootSolution};
pub use math::solve::rootfindererror::RootFinderError;

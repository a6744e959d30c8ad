use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::{
    PiecewisePolynomial,
    SplineType
};

#[derive(Deserialize)]
struct CurveJsonProp {
    name: String,
    spline_type: SplineType,
    points: Vec<f64>,
    values: Vec<f64>
}

fn get_curve_from_json(json_value: serde_json::Value) -> Result<Arc<PiecewisePolynomial>, ManagerError> {
    let json_prop: CurveJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    PiecewisePolynomial::new(json_prop.spline_type, &json_prop.points, &json_prop.values)
        .map(Arc::new)
        .map_err(|error| ManagerError::curve_build_error(&json_prop.name, error))
}

/// 以名稱管理的樣條曲線。
///
/// ```json
/// { "name": "vol", "spline_type": "KrugerCubic", "points": [0.0, 1.0], "values": [0.2, 0.3] }
/// ```
pub struct CurveManager;

impl CurveManager {
    pub fn new() -> Manager<Arc<PiecewisePolynomial>> {
        Manager::new(get_curve_from_json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;
    use crate::math::curve::curveerror::CurveError;

    #[test]
    fn test_build_curves() {
        let manager = CurveManager::new();
        manager
            .insert_obj_from_json_vec(&[
                json!({"name": "n", "spline_type": "NaturalCubic", "points": [0.0, 1.0, 2.0], "values": [0.0, 1.0, 0.0]}),
                json!({"name": "k", "spline_type": "KrugerCubic", "points": [0.0, 1.0, 2.0], "values": [0.0, 1.0, 0.0]}),
            ])
            .unwrap();
        assert_eq!(manager.get("n").unwrap().spline_type(), SplineType::NaturalCubic);
        assert_eq!(manager.get("k").unwrap().spline_type(), SplineType::KrugerCubic);
    }

    #[test]
    fn test_invalid_curve() {
        let manager = CurveManager::new();
        let err = manager
            .insert_obj_from_json(json!({"name": "bad", "spline_type": "NaturalCubic", "points": [1.0, 0.0], "values": [0.0, 1.0]}))
            .unwrap_err();
        match err {
            ManagerError::CurveBuildError { name, source } => {
                assert_eq!(name, "bad");
                assert_eq!(source, CurveError::NotStrictlyIncreasing { index: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!manager.contains("bad"));
    }

    #[test]
    fn test_from_reader_array() {
        let path = std::env::temp_dir().join(format!("numfit-curves-{}.json", std::process::id()));
        let json_array = json!([
            {"name": "a", "spline_type": "NaturalCubic", "points": [0.0, 1.0], "values": [0.0, 1.0]},
            {"name": "b", "spline_type": "KrugerCubic", "points": [0.0, 1.0], "values": [1.0, 0.0]}
        ]);
        std::fs::write(&path, json_array.to_string()).unwrap();

        let manager = CurveManager::new();
        let result = manager.from_reader(&path);
        std::fs::remove_file(&path).unwrap();
        result.unwrap();
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_unknown_spline_type() {
        let manager = CurveManager::new();
        let err = manager
            .insert_obj_from_json(json!({"name": "x", "spline_type": "Akima", "points": [0.0, 1.0], "values": [0.0, 1.0]}))
            .unwrap_err();
        assert!(matches!(err, ManagerError::JsonParseError(_)));
    }
}

use std::cell::{
    Cell,
    RefMut,
    RefCell
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::curve::nonparametriccurve::curvemanager::CurveManager;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::PiecewisePolynomial;
use crate::math::solve::rootfinder::{
    RootFinder,
    RootFinderConfig
};

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    root_finder: RootFinderConfig,
    #[serde(default)]
    curves: Vec<serde_json::Value>
}

/// 從 JSON 載入的 root finder 設定與具名曲線。
///
/// ```json
/// {
///     "root_finder": { "max_iterations": 150 },
///     "curves": [
///         { "name": "vol", "spline_type": "NaturalCubic", "points": [0.0, 1.0], "values": [0.2, 0.3] }
///     ]
/// }
/// ```
/// 缺少的區段使用預設值。
pub struct Configuration {
    root_finder_config_cell: Cell<RootFinderConfig>,
    curve_manager_cell: RefCell<Manager<Arc<PiecewisePolynomial>>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            root_finder_config_cell: Cell::new(RootFinderConfig::default()),
            curve_manager_cell: RefCell::new(CurveManager::new())
        }
    }

    pub fn root_finder_config(&self) -> RootFinderConfig {
        self.root_finder_config_cell.get()
    }

    pub fn root_finder(&self) -> RootFinder {
        RootFinder::new(self.root_finder_config())
    }

    /// 回傳的 `RefMut` 在呼叫 `from_reader` / `from_json_str` 前必須先釋放，否則會 panic。
    pub fn curve_manager(&self) -> RefMut<'_, Manager<Arc<PiecewisePolynomial>>> {
        self.curve_manager_cell.borrow_mut()
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    /// 全部曲線建構成功後才寫入；任何一條失敗時既有狀態不變。
    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let staged = CurveManager::new();
        staged.insert_obj_from_json_vec(&json_prop.curves)?;
        let curves: Vec<(String, Arc<PiecewisePolynomial>)> = staged.map().drain().collect();

        self.curve_manager().map().extend(curves);
        self.root_finder_config_cell.set(json_prop.root_finder);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;

/// 以名稱管理由 JSON 建構的物件。
pub trait IManager<V>
where
    V: Clone,
{
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// 檔案內容可以是單一物件或物件陣列
    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}

pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V>
where
    V: Clone,
{
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl<V> IManager<V> for Manager<V>
where
    V: Clone,
{
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn get_scale_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        json_value["scale"]
            .as_f64()
            .ok_or_else(|| ManagerError::map_elem_not_found("scale"))
    }

    #[test]
    fn test_insert_and_get() {
        let manager = Manager::new(get_scale_from_json);
        manager
            .insert_obj_from_json_vec(&[
                json!({"name": "half", "scale": 0.5}),
                json!({"name": "double", "scale": 2.0}),
            ])
            .unwrap();
        assert_eq!(manager.get("half").unwrap(), 0.5);
        assert!(manager.contains("double"));
        assert_eq!(manager.names(), vec!["double".to_owned(), "half".to_owned()]);
    }

    #[test]
    fn test_missing_name() {
        let manager = Manager::new(get_scale_from_json);
        let err = manager.get("nothing").unwrap_err();
        assert_eq!(err.to_string(), "key 'nothing' not found");

        let err = manager.insert_obj_from_json(json!({"scale": 1.0})).unwrap_err();
        assert!(matches!(err, ManagerError::JsonParseError(_)));
    }
}

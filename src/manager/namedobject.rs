use serde::Deserialize;

/// 任何設定物件都必須帶 `name`，作為 `Manager` 的 key
#[derive(Debug, Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}

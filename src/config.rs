use crate::error::{Result, ThemeError};
use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_WORKER_PATH: &str = "/sw.js";

/// Fixed names the controller works with. A host page can override any of them
/// with a partial JSON object; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub worker_path: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            worker_path: DEFAULT_WORKER_PATH.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ThemeError::Config(e.to_string()))
    }
}

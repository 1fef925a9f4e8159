use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Directory relative CSV paths are resolved against.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    #[serde(default = "default_true")]
    pub has_header: bool,

    /// SQLite file holding input tables. Defaults to the results database.
    #[serde(default)]
    pub database_path: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            has_header: true,
            database_path: None,
        }
    }
}

impl InputConfig {
    pub fn resolve_csv_path(&self, target: &str) -> PathBuf {
        let path = Path::new(target);
        if path.is_absolute() || path.exists() {
            path.to_path_buf()
        } else {
            Path::new(&self.base_dir).join(path)
        }
    }
}

fn default_base_dir() -> String {
    "constants".to_string()
}

fn default_true() -> bool {
    true
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoIpConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Keep the country database open across lookups instead of
    /// reopening the file every time.
    #[serde(default = "default_true")]
    pub cache_handle: bool,
}

impl Default for GeoIpConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            cache_handle: true,
        }
    }
}

fn default_database_path() -> String {
    "constants/GeoLite2-Country.mmdb".to_string()
}

fn default_true() -> bool {
    true
}

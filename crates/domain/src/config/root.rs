use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::geoip::GeoIpConfig;
use super::input::InputConfig;
use super::logging::LoggingConfig;
use super::resolver::{ResolverConfig, LEGACY_UDP_PAYLOAD};

const LOCAL_CONFIG: &str = "nsfinder.toml";
const SYSTEM_CONFIG: &str = "/etc/nsfinder/config.toml";

/// Main configuration structure for nsfinder
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Delegation walk and forward lookup settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Country database
    #[serde(default)]
    pub geoip: GeoIpConfig,

    /// Result store
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Batch input
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nsfinder.toml in current directory
    /// 3. /etc/nsfinder/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(geoip) = overrides.geoip_database {
            self.geoip.database_path = geoip;
        }
        if let Some(depth) = overrides.max_zone_depth {
            self.resolver.max_zone_depth = depth;
        }
        if let Some(server) = overrides.bootstrap_server {
            self.resolver.bootstrap_server = Some(server);
        }
        if overrides.no_persist {
            self.database.persist = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_secs cannot be 0".to_string(),
            ));
        }

        if self.resolver.lookup_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "lookup_timeout_secs cannot be 0".to_string(),
            ));
        }

        if self.resolver.udp_payload_size <= LEGACY_UDP_PAYLOAD {
            return Err(ConfigError::Validation(format!(
                "udp_payload_size must exceed {} bytes",
                LEGACY_UDP_PAYLOAD
            )));
        }

        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.database.persist && self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub database_path: Option<String>,
    pub geoip_database: Option<String>,
    pub max_zone_depth: Option<usize>,
    pub bootstrap_server: Option<String>,
    pub no_persist: bool,
}

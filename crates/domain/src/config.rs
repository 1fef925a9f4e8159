pub mod database;
pub mod errors;
pub mod geoip;
pub mod input;
pub mod logging;
pub mod resolver;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use geoip::GeoIpConfig;
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};

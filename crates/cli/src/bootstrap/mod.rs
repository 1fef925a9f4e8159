mod config;
mod database;
mod logging;

pub use config::{load_config, log_config_source};
pub use database::init_database;
pub use logging::init_logging;

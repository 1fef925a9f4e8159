use nsfinder_domain::config::LoggingConfig;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "nsfinder.log";

/// Console logs go to stderr so stdout only carries reports. With a log
/// directory configured, JSON lines are also appended to `nsfinder.log`.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let file = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(Path::new(directory).join(LOG_FILE))?;
            Some(fmt::layer().json().with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    Ok(())
}

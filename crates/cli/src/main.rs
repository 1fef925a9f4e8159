use clap::Parser;
use nsfinder_application::ports::{SearchRepository, TargetSource};
use nsfinder_application::use_cases::RunBatchUseCase;
use nsfinder_domain::{CliOverrides, Config};
use nsfinder_infrastructure::input::{CsvTargetSource, SqliteTableTargetSource};
use nsfinder_infrastructure::repositories::SqliteSearchRepository;
use nsfinder_infrastructure::system::bootstrap_server;
use report::OutputFormat;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "nsfinder")]
#[command(version)]
#[command(about = "Walks NS delegations of domains, geolocates their addresses and stores the results")]
struct Cli {
    /// CSV file (`*.csv`) or SQLite table name holding the domains
    target: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Results database path
    #[arg(long)]
    database: Option<String>,

    /// MaxMind country database path
    #[arg(long, value_name = "FILE")]
    geoip_db: Option<String>,

    /// Delegation hops followed below the root
    #[arg(long)]
    max_depth: Option<usize>,

    /// Server for the first delegation query instead of the system resolver
    #[arg(short = 's', long, value_name = "ADDR")]
    server: Option<String>,

    /// Print results without storing them
    #[arg(long)]
    no_persist: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        database_path: cli.database.clone(),
        geoip_database: cli.geoip_db.clone(),
        max_zone_depth: cli.max_depth,
        bootstrap_server: cli.server.clone(),
        no_persist: cli.no_persist,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging)?;
    bootstrap::log_config_source(cli.config.as_deref());

    info!("Starting nsfinder v{}", env!("CARGO_PKG_VERSION"));

    let server = bootstrap_server(&config.resolver).await?;

    let results_pool = if config.database.persist {
        Some(bootstrap::init_database(&config.database.url(), config.database.max_connections).await?)
    } else {
        None
    };

    let source = target_source(&cli.target, &config, results_pool.as_ref()).await?;

    let adapters = di::Adapters::new(&config);
    let use_cases = di::UseCases::new(&config, &adapters, server);

    let mut batch = RunBatchUseCase::new(source, use_cases.find_name_servers.clone());
    if let Some(pool) = results_pool {
        let repository: Arc<dyn SearchRepository> = Arc::new(SqliteSearchRepository::new(pool));
        batch = batch.with_repository(repository);
    }

    let format = cli.format;
    let summary = batch
        .execute(|outcome| report::print_outcome(outcome, format))
        .await?;

    report::print_summary(&summary, format);
    Ok(())
}

async fn target_source(
    target: &str,
    config: &Config,
    results_pool: Option<&SqlitePool>,
) -> anyhow::Result<Arc<dyn TargetSource>> {
    if target.to_ascii_lowercase().ends_with(".csv") {
        let path = config.input.resolve_csv_path(target);
        return Ok(Arc::new(CsvTargetSource::new(path, config.input.has_header)));
    }

    let pool = match (&config.input.database_path, results_pool) {
        (Some(path), _) => {
            bootstrap::init_database(&format!("sqlite:{}", path), config.database.max_connections)
                .await?
        }
        (None, Some(pool)) => pool.clone(),
        (None, None) => {
            bootstrap::init_database(&config.database.url(), config.database.max_connections).await?
        }
    };

    Ok(Arc::new(SqliteTableTargetSource::new(pool, target)?))
}

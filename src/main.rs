//! ReliefHub Server: disaster reporting and response coordination
//!
//! Main entry point that loads configuration, installs logging and
//! starts the HTTP server.

use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder as RollingBuilder, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use reliefhub_core::config::AppConfig;
use reliefhub_core::config::logging::{LogRotation, LoggingConfig};
use reliefhub_core::error::AppError;
use reliefhub_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = AppConfig::current_env();
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };

    info!(env = %env, "Starting ReliefHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!(error = %e, chain = ?e.chain(), "Server error");
        std::process::exit(1);
    }
}

/// Console output per `logging.format`, plus an `ERROR`-only rolling file.
fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard, AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console: Box<dyn Layer<Registry> + Send + Sync> = match config.format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .boxed(),
        _ => fmt::layer().pretty().with_target(true).boxed(),
    };

    let rotation = match config.rotation {
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    };
    let appender = RollingBuilder::new()
        .rotation(rotation)
        .filename_prefix(&config.file_prefix)
        .max_log_files(config.max_files.max(1))
        .build(&config.directory)
        .map_err(|e| AppError::configuration(format!("Cannot open log directory: {e}")))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let error_file = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(console.with_filter(filter))
        .with(error_file)
        .init();

    Ok(guard)
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(url = %config.database.url, "Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;
    reliefhub_api::run_server(config, db).await
}

//! CLI command definitions and dispatch.

pub mod bootstrap;
pub mod migrate;
pub mod session;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use reliefhub_core::config::AppConfig;
use reliefhub_core::error::AppError;
use reliefhub_database::DatabasePool;
use reliefhub_database::repositories::{SessionRepository, UserRepository};

use crate::output::{OutputFormat, Reporter};

/// ReliefHub: disaster reporting and response coordination
#[derive(Debug, Parser)]
#[command(name = "reliefhub", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to apply (defaults to `RELIEFHUB_ENV`)
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Apply migrations and seed the administrator account
    Bootstrap,
    /// Account management
    User(user::UserArgs),
    /// Session maintenance
    Session(session::SessionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let ctx = CliContext::open(self).await?;
        let result = match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &ctx).await,
            Commands::Bootstrap => bootstrap::execute(&ctx).await,
            Commands::User(args) => user::execute(args, &ctx).await,
            Commands::Session(args) => session::execute(args, &ctx).await,
        };
        ctx.db.close().await;
        result
    }
}

/// Configuration, connections and console output shared by every command.
pub struct CliContext {
    pub config: AppConfig,
    pub db: DatabasePool,
    pub out: Reporter,
}

impl CliContext {
    async fn open(cli: &Cli) -> Result<Self, AppError> {
        let env = cli.env.clone().unwrap_or_else(AppConfig::current_env);
        let config = AppConfig::load_from(&cli.config_dir, &env)?;
        let db = DatabasePool::connect(&config.database).await?;
        Ok(Self {
            config,
            db,
            out: Reporter::new(cli.format),
        })
    }

    pub fn user_repo(&self) -> Arc<UserRepository> {
        Arc::new(UserRepository::new(self.db.pool().clone()))
    }

    pub fn session_repo(&self) -> Arc<SessionRepository> {
        Arc::new(SessionRepository::new(self.db.pool().clone()))
    }
}

/// Asks for confirmation unless `force` is set.
pub fn confirm(prompt: &str, force: bool) -> Result<bool, AppError> {
    if force {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

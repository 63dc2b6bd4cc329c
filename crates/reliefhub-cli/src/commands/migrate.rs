//! Database migration management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use reliefhub_core::error::AppError;
use reliefhub_database::migration::{MigrationState, migration_status, run_migrations};

use super::CliContext;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// List embedded migrations and whether each has been applied
    Status,
}

#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
    applied: String,
}

impl From<MigrationState> for MigrationRow {
    fn from(m: MigrationState) -> Self {
        Self {
            version: m.version,
            description: m.description,
            applied: if m.applied { "yes" } else { "pending" }.to_string(),
        }
    }
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, ctx: &CliContext) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            ctx.out.note("Running database migrations...");
            run_migrations(ctx.db.pool()).await?;
            ctx.out.done("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<MigrationRow> = migration_status(ctx.db.pool())
                .await?
                .into_iter()
                .map(MigrationRow::from)
                .collect();
            let pending = rows.iter().filter(|r| r.applied == "pending").count();
            ctx.out.rows("migrations", &rows)?;
            if pending > 0 {
                ctx.out.warning(&format!("{pending} migration(s) pending"));
            }
        }
    }
    Ok(())
}

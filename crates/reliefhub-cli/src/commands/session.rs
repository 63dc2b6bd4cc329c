//! Session maintenance commands.

use clap::{Args, Subcommand};

use reliefhub_auth::session::SessionManager;
use reliefhub_core::error::AppError;

use super::CliContext;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Delete sessions past their absolute or idle timeout
    Purge,
}

/// Execute session commands
pub async fn execute(args: &SessionArgs, ctx: &CliContext) -> Result<(), AppError> {
    match &args.command {
        SessionCommand::Purge => {
            let sessions = SessionManager::new(
                ctx.user_repo(),
                ctx.session_repo(),
                ctx.config.session.clone(),
            );
            let removed = sessions.purge_expired().await?;
            ctx.out.done(&format!("Removed {removed} expired session(s)."));
        }
    }
    Ok(())
}

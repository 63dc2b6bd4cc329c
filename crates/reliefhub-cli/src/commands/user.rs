//! Account management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use reliefhub_auth::session::SessionManager;
use reliefhub_core::error::AppError;
use reliefhub_entity::user::{User, UserRole};
use reliefhub_service::AccountService;

use super::{CliContext, confirm};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List accounts
    List {
        /// Filter by role (admin, volunteer, citizen)
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Re-enable a deactivated account
    Activate {
        email: String,
    },
    /// Deactivate an account; its sessions stop working immediately
    Deactivate {
        email: String,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Change an account's role
    SetRole {
        email: String,
        role: String,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
    active: bool,
    created_at: String,
}

impl From<User> for UserRow {
    fn from(u: User) -> Self {
        Self {
            id: u.id.get(),
            name: u.name,
            email: u.email,
            role: u.role.to_string(),
            active: u.is_active,
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, ctx: &CliContext) -> Result<(), AppError> {
    let user_repo = ctx.user_repo();
    let sessions = Arc::new(SessionManager::new(
        user_repo.clone(),
        ctx.session_repo(),
        ctx.config.session.clone(),
    ));
    let accounts = AccountService::new(user_repo, sessions, ctx.config.auth.clone());

    match &args.command {
        UserCommand::List { role } => {
            let role = role.as_deref().map(str::parse::<UserRole>).transpose()?;
            let rows: Vec<UserRow> = accounts
                .list_users(role)
                .await?
                .into_iter()
                .map(UserRow::from)
                .collect();
            ctx.out.rows("users", &rows)?;
        }
        UserCommand::Activate { email } => {
            accounts.set_active(email, true).await?;
            ctx.out.done(&format!("Account '{email}' activated"));
        }
        UserCommand::Deactivate { email, force } => {
            if !confirm(&format!("Deactivate '{email}'?"), *force)? {
                ctx.out.warning("Cancelled.");
                return Ok(());
            }
            accounts.set_active(email, false).await?;
            ctx.out.done(&format!("Account '{email}' deactivated"));
        }
        UserCommand::SetRole { email, role, force } => {
            let role: UserRole = role.parse()?;
            if !confirm(&format!("Make '{email}' a {role}?"), *force)? {
                ctx.out.warning("Cancelled.");
                return Ok(());
            }
            let user = accounts.set_role(email, role).await?;
            ctx.out.done(&format!("Account '{}' is now {}", user.email, user.role));
        }
    }

    Ok(())
}

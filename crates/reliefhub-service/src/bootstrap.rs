//! One-time database provisioning and administrator seeding.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use reliefhub_auth::password::PasswordHasher;
use reliefhub_core::config::bootstrap::BootstrapConfig;
use reliefhub_core::result::AppResult;
use reliefhub_database::DatabasePool;
use reliefhub_database::migration::run_migrations;
use reliefhub_database::repositories::UserRepository;
use reliefhub_entity::user::{CreateUser, UserRole};

/// Runs migrations and seeds the admin account once per process.
///
/// Concurrent callers of [`Bootstrapper::ensure`] wait on the same
/// initialization. A failed attempt leaves the cell empty so the next
/// request retries.
#[derive(Debug)]
pub struct Bootstrapper {
    db: DatabasePool,
    user_repo: Arc<UserRepository>,
    config: BootstrapConfig,
    done: OnceCell<()>,
}

impl Bootstrapper {
    pub fn new(db: DatabasePool, user_repo: Arc<UserRepository>, config: BootstrapConfig) -> Self {
        Self {
            db,
            user_repo,
            config,
            done: OnceCell::new(),
        }
    }

    /// Whether initialization already completed.
    pub fn is_ready(&self) -> bool {
        self.done.initialized()
    }

    /// Provisions the database if this process has not done so yet.
    pub async fn ensure(&self) -> AppResult<()> {
        self.done
            .get_or_try_init(|| async {
                run_migrations(self.db.pool()).await?;
                if self.config.seed_admin {
                    self.seed_admin().await?;
                }
                info!("Bootstrap complete");
                Ok(())
            })
            .await
            .map(|_| ())
    }

    /// Creates the configured administrator unless an account with that
    /// email already exists. Returns whether an account was created.
    pub async fn seed_admin(&self) -> AppResult<bool> {
        let email = self.config.admin_email.trim().to_lowercase();
        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            if existing.role != UserRole::Admin {
                warn!(email = %email, role = %existing.role, "Bootstrap email belongs to a non-admin account");
            }
            return Ok(false);
        }

        let password_hash = PasswordHasher::new().hash(&self.config.admin_password)?;
        let admin = self
            .user_repo
            .create(&CreateUser {
                name: self.config.admin_name.clone(),
                email,
                password_hash,
                phone: Some(self.config.admin_phone.clone()),
                location: None,
                role: UserRole::Admin,
            })
            .await?;
        info!(user_id = %admin.id, email = %admin.email, "Seeded administrator account");
        Ok(true)
    }
}

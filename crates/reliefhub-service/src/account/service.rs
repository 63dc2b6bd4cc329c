//! Account operations: signup, login, logout and admin account changes.

use std::sync::Arc;

use tracing::info;

use reliefhub_auth::password::{PasswordHasher, PasswordValidator};
use reliefhub_auth::session::{LoginResult, SessionManager};
use reliefhub_core::config::auth::AuthConfig;
use reliefhub_core::error::AppError;
use reliefhub_core::result::AppResult;
use reliefhub_database::repositories::UserRepository;
use reliefhub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Fields accepted at signup.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Requested role; absent means citizen.
    pub role: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Handles identity lifecycle operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    sessions: Arc<SessionManager>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    config: AuthConfig,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        sessions: Arc<SessionManager>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            sessions,
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(&config),
            config,
        }
    }

    /// The session manager backing login and authentication.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Registers a new account.
    pub async fn signup(&self, input: SignupInput) -> AppResult<User> {
        let name = input.name.trim();
        let email = input.email.trim().to_lowercase();
        if name.is_empty() || email.is_empty() || input.password.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }
        self.validator.validate(&input.password)?;

        let role = match input.role.as_deref().map(str::trim) {
            None | Some("") => UserRole::Citizen,
            Some(raw) => {
                let role: UserRole = raw.parse()?;
                if !self.config.allows_signup_role(role.as_str()) {
                    return Err(AppError::validation(format!(
                        "Role '{role}' cannot be chosen at signup"
                    )));
                }
                role
            }
        };

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email,
                password_hash: self.hasher.hash(&input.password)?,
                phone: non_blank(input.phone),
                location: non_blank(input.location),
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Verifies credentials and opens a session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Missing email or password"));
        }
        self.sessions.login(email.trim(), password).await
    }

    /// Closes the caller's session.
    pub async fn logout(&self, ctx: &RequestContext) -> AppResult<()> {
        self.sessions.logout(ctx.session_id).await
    }

    /// Loads the caller's account.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }

    /// Lists accounts, optionally restricted to a role.
    pub async fn list_users(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(role).await
    }

    /// Activates or deactivates the account with `email`.
    pub async fn set_active(&self, email: &str, active: bool) -> AppResult<User> {
        let user = self.find_by_email(email).await?;
        self.user_repo.set_active(user.id, active).await?;
        info!(user_id = %user.id, active, "Account status changed");
        Ok(User {
            is_active: active,
            ..user
        })
    }

    /// Changes the role of the account with `email`.
    pub async fn set_role(&self, email: &str, role: UserRole) -> AppResult<User> {
        let user = self.find_by_email(email).await?;
        self.user_repo.set_role(user.id, role).await?;
        info!(user_id = %user.id, old_role = %user.role, new_role = %role, "Role changed");
        Ok(User { role, ..user })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No account with email '{email}'")))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

//! First-run provisioning.

use reliefhub_core::error::AppError;
use reliefhub_service::Bootstrapper;

use super::CliContext;

/// Applies migrations and seeds the administrator.
pub async fn execute(ctx: &CliContext) -> Result<(), AppError> {
    let mut config = ctx.config.bootstrap.clone();
    // Seeding runs explicitly below so the outcome can be reported.
    config.seed_admin = false;
    let bootstrapper = Bootstrapper::new(ctx.db.clone(), ctx.user_repo(), config);
    bootstrapper.ensure().await?;

    if bootstrapper.seed_admin().await? {
        ctx.out.done(&format!(
            "Created administrator '{}'.",
            ctx.config.bootstrap.admin_email
        ));
    } else {
        ctx.out.warning(&format!(
            "An account with '{}' already exists; nothing seeded.",
            ctx.config.bootstrap.admin_email
        ));
    }
    Ok(())
}

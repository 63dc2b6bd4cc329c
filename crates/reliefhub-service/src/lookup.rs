//! Batched user loading for embedding reporters and volunteers.

use std::collections::HashMap;

use reliefhub_core::result::AppResult;
use reliefhub_core::types::UserId;
use reliefhub_database::repositories::UserRepository;
use reliefhub_entity::user::User;

/// Loads every distinct user in `ids` with one query.
pub(crate) async fn users_by_id(
    repo: &UserRepository,
    ids: impl IntoIterator<Item = UserId>,
) -> AppResult<HashMap<UserId, User>> {
    let mut ids: Vec<UserId> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    Ok(repo
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect())
}

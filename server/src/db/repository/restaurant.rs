//! Restaurant Repository
//!
//! Single-tenant: reservation creation resolves `restaurant_id`
//! through [`find_first`], and exactly one row is expected to exist.

use super::{RepoError, RepoResult};
use shared::models::Restaurant;
use shared::util::{new_record_id, now_millis};
use sqlx::SqlitePool;

/// Oldest restaurant row, the one reservations attach to.
pub async fn find_first(pool: &SqlitePool) -> RepoResult<Option<Restaurant>> {
    let row = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, created_at FROM restaurant ORDER BY created_at ASC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Restaurant>> {
    let row = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, created_at FROM restaurant WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create the restaurant row (startup seed and tests).
pub async fn create(pool: &SqlitePool, name: &str) -> RepoResult<Restaurant> {
    let id = new_record_id();
    let now = now_millis();
    sqlx::query("INSERT INTO restaurant (id, name, created_at) VALUES (?1, ?2, ?3)")
        .bind(&id)
        .bind(name)
        .bind(now)
        .execute(pool)
        .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}

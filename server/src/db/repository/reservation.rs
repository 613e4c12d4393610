//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{Reservation, ReservationCreate, ReservationStatus};
use shared::util::{new_record_id, now_millis};
use sqlx::SqlitePool;

const RESERVATION_SELECT: &str = "SELECT id, restaurant_id, customer_name, phone_number, reservation_date, reservation_time, party_size, special_requests, status, created_at, updated_at FROM reservation";

/// Ascending date, then time within equal dates. Both columns are
/// zero-padded text, so lexicographic order is chronological order.
const RESERVATION_ORDER: &str = "ORDER BY reservation_date ASC, reservation_time ASC";

/// List reservations, optionally filtered by restaurant and/or exact
/// date. Always fully ordered; no pagination.
pub async fn find_all(
    pool: &SqlitePool,
    restaurant_id: Option<&str>,
    date: Option<&str>,
) -> RepoResult<Vec<Reservation>> {
    let rows = match (restaurant_id, date) {
        (Some(rid), Some(date)) => {
            let sql = format!(
                "{RESERVATION_SELECT} WHERE restaurant_id = ? AND reservation_date = ? {RESERVATION_ORDER}"
            );
            sqlx::query_as::<_, Reservation>(&sql)
                .bind(rid)
                .bind(date)
                .fetch_all(pool)
                .await?
        }
        (Some(rid), None) => {
            let sql = format!("{RESERVATION_SELECT} WHERE restaurant_id = ? {RESERVATION_ORDER}");
            sqlx::query_as::<_, Reservation>(&sql)
                .bind(rid)
                .fetch_all(pool)
                .await?
        }
        (None, Some(date)) => {
            let sql =
                format!("{RESERVATION_SELECT} WHERE reservation_date = ? {RESERVATION_ORDER}");
            sqlx::query_as::<_, Reservation>(&sql)
                .bind(date)
                .fetch_all(pool)
                .await?
        }
        (None, None) => {
            let sql = format!("{RESERVATION_SELECT} {RESERVATION_ORDER}");
            sqlx::query_as::<_, Reservation>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Reservation>> {
    let sql = format!("{RESERVATION_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Reservation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a new reservation.
///
/// The store assigns the id and timestamps, and the status is fixed
/// to `pending` here regardless of anything the caller supplied over
/// the wire.
pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<Reservation> {
    let id = new_record_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO reservation (id, restaurant_id, customer_name, phone_number, reservation_date, reservation_time, party_size, special_requests, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
    )
    .bind(&id)
    .bind(&data.restaurant_id)
    .bind(&data.customer_name)
    .bind(&data.phone_number)
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.party_size)
    .bind(&data.special_requests)
    .bind(ReservationStatus::Pending)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

/// Transition a reservation to `confirmed` or `cancelled`.
///
/// Only `pending` reservations may transition. The guard is checked
/// up front for a precise error message, and repeated in the UPDATE's
/// WHERE clause so a concurrent transition can never overwrite a
/// terminal state.
pub async fn update_status(
    pool: &SqlitePool,
    id: &str,
    status: ReservationStatus,
) -> RepoResult<Reservation> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))?;

    if !existing.status.can_transition_to(status) {
        return Err(RepoError::Conflict(format!(
            "Reservation {id} is already {}",
            existing.status
        )));
    }

    let rows = sqlx::query(
        "UPDATE reservation SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = 'pending'",
    )
    .bind(status)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        // Lost the race against another staff action
        return Err(RepoError::Conflict(format!(
            "Reservation {id} is no longer pending"
        )));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

/// Hard delete. Deleting a missing id is an error, not a no-op.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    Ok(true)
}

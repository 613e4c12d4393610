//! Reservation API Handlers
//!
//! The lifecycle controller: validates intake requests, fixes the
//! initial status to `pending`, and guards staff status transitions.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{reservation, restaurant};
use crate::utils::validation::{
    require_text, validate_date, validate_party_size, validate_phone, validate_time_slot,
};
use crate::utils::{ApiResponse, AppError, AppResult};
use shared::models::{Reservation, ReservationCreate, ReservationStatus, StatusUpdate};

/// Intake payload. Everything is optional at the serde level so the
/// 400 response can name the missing field instead of failing body
/// extraction; any `status` the client smuggles in is ignored by the
/// store layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub reservation_date: Option<String>,
    pub reservation_time: Option<String>,
    pub party_size: Option<i64>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub restaurant_id: Option<String>,
    pub date: Option<String>,
}

/// POST /reservations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Reservation>>)> {
    let customer_name = require_text(payload.customer_name.as_deref(), "customerName")?;
    let phone_number = require_text(payload.phone_number.as_deref(), "phoneNumber")?;
    let reservation_date = require_text(payload.reservation_date.as_deref(), "reservationDate")?;
    let reservation_time = require_text(payload.reservation_time.as_deref(), "reservationTime")?;
    let party_size = payload
        .party_size
        .ok_or_else(|| AppError::validation("partySize is required"))?;

    validate_phone(&phone_number)?;
    validate_date(&reservation_date, chrono::Local::now().date_naive())?;
    validate_time_slot(&reservation_time)?;
    validate_party_size(party_size)?;

    // Single-tenant lookup: no restaurant row is a deployment fault,
    // not a user input error. Lookup and insert are two independent
    // store calls; best-effort by design.
    let restaurant = restaurant::find_first(&state.pool)
        .await?
        .ok_or_else(|| AppError::internal("No restaurant configured"))?;

    let created = reservation::create(
        &state.pool,
        ReservationCreate {
            restaurant_id: restaurant.id,
            customer_name,
            phone_number,
            reservation_date,
            reservation_time,
            party_size,
            special_requests: payload
                .special_requests
                .filter(|s| !s.trim().is_empty()),
        },
    )
    .await?;

    tracing::info!(
        reservation_id = %created.id,
        date = %created.reservation_date,
        time = %created.reservation_time,
        "Reservation created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// GET /reservations?restaurantId=&date=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Reservation>>>> {
    let reservations = reservation::find_all(
        &state.pool,
        query.restaurant_id.as_deref(),
        query.date.as_deref(),
    )
    .await?;
    Ok(Json(ApiResponse::success(reservations)))
}

/// GET /reservations/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let found = reservation::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;
    Ok(Json(ApiResponse::success(found)))
}

/// PUT /reservations/{id}
///
/// Staff action: the only mutable field after creation is `status`,
/// and the only accepted targets are the terminal states.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let status = payload
        .status
        .ok_or_else(|| AppError::validation("status is required"))?;
    let status: ReservationStatus = status
        .parse()
        .ok()
        .filter(ReservationStatus::is_terminal)
        .ok_or_else(|| AppError::validation("status must be confirmed or cancelled"))?;

    let updated = reservation::update_status(&state.pool, &id, status).await?;

    tracing::info!(reservation_id = %id, status = %status, "Reservation status updated");

    Ok(Json(ApiResponse::success(updated)))
}

/// DELETE /reservations/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    reservation::delete(&state.pool, &id).await?;

    tracing::info!(reservation_id = %id, "Reservation deleted");

    Ok(Json(ApiResponse::message("Reservation deleted")))
}

//! Input validation helpers
//!
//! Field-level checks for the reservation intake contract. Every
//! failure carries the offending field's wire name so the caller can
//! surface it directly.

use chrono::NaiveDate;

use crate::utils::AppError;
use shared::models::{TIME_SLOTS, is_valid_phone};

/// Required field: present and, for text, non-blank.
pub fn require_text(value: Option<&str>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Phone numbers: digits and `+ - ( )` only.
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(AppError::validation(
            "phoneNumber must contain only digits and + - ( )",
        ))
    }
}

/// Reservation date: `YYYY-MM-DD`, today or later. The intake form
/// further restricts to tomorrow; the server accepts same-day walk-in
/// entries made by staff.
pub fn validate_date(date: &str, today: NaiveDate) -> Result<(), AppError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation("reservationDate must be a YYYY-MM-DD date"))?;
    if parsed < today {
        return Err(AppError::validation(
            "reservationDate must be today or later",
        ));
    }
    Ok(())
}

/// Reservation time: one of the fixed half-hour service slots.
pub fn validate_time_slot(time: &str) -> Result<(), AppError> {
    if TIME_SLOTS.contains(&time) {
        Ok(())
    } else {
        Err(AppError::validation(
            "reservationTime must be one of the bookable time slots",
        ))
    }
}

/// Party size: at least one guest.
pub fn validate_party_size(party_size: i64) -> Result<(), AppError> {
    if party_size >= 1 {
        Ok(())
    } else {
        Err(AppError::validation("partySize must be at least 1"))
    }
}

//! Intake form rules
//!
//! Pre-submit validation mirroring the customer-facing form: the
//! server re-checks everything, this exists for immediate field-level
//! feedback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use shared::models::{MAX_FORM_PARTY_SIZE, TIME_SLOTS, is_valid_phone};

/// What the intake form submits (wire field names).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFormData {
    pub customer_name: String,
    pub phone_number: String,
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    /// One of [`TIME_SLOTS`]
    pub reservation_time: String,
    pub party_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Earliest date the form lets a customer pick: tomorrow. (Staff may
/// still enter same-day reservations through other channels; the
/// server only requires today or later.)
pub fn min_reservation_date(today: NaiveDate) -> NaiveDate {
    today + chrono::Duration::days(1)
}

/// Party sizes the form offers.
pub fn party_sizes() -> impl Iterator<Item = i64> {
    1..=MAX_FORM_PARTY_SIZE
}

impl ReservationFormData {
    /// Validate against the form rules. Returns one message per
    /// offending field, keyed by wire field name; empty means
    /// submittable.
    pub fn validate(&self, today: NaiveDate) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        if self.customer_name.trim().is_empty() {
            errors.insert("customerName", "Please enter your name".to_string());
        }

        if self.phone_number.trim().is_empty() {
            errors.insert("phoneNumber", "Please enter your phone number".to_string());
        } else if !is_valid_phone(&self.phone_number) {
            errors.insert("phoneNumber", "Please enter a valid phone number".to_string());
        }

        match NaiveDate::parse_from_str(&self.reservation_date, "%Y-%m-%d") {
            Ok(date) if date >= min_reservation_date(today) => {}
            Ok(_) => {
                errors.insert(
                    "reservationDate",
                    "Reservations open from tomorrow onwards".to_string(),
                );
            }
            Err(_) => {
                errors.insert("reservationDate", "Please choose a date".to_string());
            }
        }

        if !TIME_SLOTS.contains(&self.reservation_time.as_str()) {
            errors.insert("reservationTime", "Please choose a time".to_string());
        }

        if self.party_size < 1 || self.party_size > MAX_FORM_PARTY_SIZE {
            errors.insert("partySize", "Please choose a party size".to_string());
        }

        errors
    }
}

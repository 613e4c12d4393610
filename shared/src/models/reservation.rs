//! Reservation Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bookable half-hour slots within service hours (lunch + dinner).
pub const TIME_SLOTS: [&str; 14] = [
    "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "17:00", "17:30", "18:00", "18:30",
    "19:00", "19:30", "20:00", "20:30",
];

/// Largest party the intake form offers. The server only enforces the minimum.
pub const MAX_FORM_PARTY_SIZE: i64 = 8;

/// Phone numbers accept digits plus `+ - ( )`, nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')'))
}

/// Reservation lifecycle state
///
/// `pending` is the only initial state; `confirmed` and `cancelled`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReservationStatus::Pending)
    }

    /// Legal transitions: pending → confirmed, pending → cancelled.
    pub fn can_transition_to(&self, target: ReservationStatus) -> bool {
        matches!(self, ReservationStatus::Pending) && target.is_terminal()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Reservation entity
///
/// Row and wire type in one; field names match the stored columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: String,
    pub restaurant_id: String,
    pub customer_name: String,
    pub phone_number: String,
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    /// `HH:MM`, one of [`TIME_SLOTS`]
    pub reservation_time: String,
    pub party_size: i64,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create reservation payload (store layer)
///
/// Carries no status on purpose: the store fixes new rows to
/// `pending` whatever the caller sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub restaurant_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub party_size: i64,
    pub special_requests: Option<String>,
}

/// Status transition payload (`PUT /reservations/{id}`)
///
/// The status arrives as a raw string so the handler can reject
/// unknown values with a field-level message instead of a body
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
}

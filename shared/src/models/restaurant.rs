//! Restaurant Model
//!
//! Single-tenant deployment: exactly one row is expected, and it only
//! exists to supply `restaurant_id` for reservations.

use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

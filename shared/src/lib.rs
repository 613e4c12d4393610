//! Shared types for the Yoyaku reservation system
//!
//! Common types used by both the HTTP server and client crates:
//! data models, the unified API response envelope, and small
//! id/time utilities.
//!
//! DB row derives (`sqlx::FromRow`) are gated behind the `db`
//! feature so client-side consumers stay free of sqlx.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::{
    Reservation, ReservationCreate, ReservationStatus, Restaurant, StatusUpdate,
};
pub use response::ApiResponse;

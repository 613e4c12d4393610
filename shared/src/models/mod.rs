//! Data models
//!
//! Shared between server and client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are opaque TEXT (UUID v4, assigned by the store layer).

pub mod reservation;
pub mod restaurant;

// Re-exports
pub use reservation::*;
pub use restaurant::*;

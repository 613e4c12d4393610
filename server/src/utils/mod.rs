//! Utility module - errors, validation, logging
//!
//! - [`AppError`] - application error type
//! - [`ApiResponse`] - response envelope (from `shared::response`)
//! - validation and logging helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;

// Re-export the envelope from shared so handlers and tests share one type
pub use shared::response::ApiResponse;

//! Repository Module
//!
//! Plain-function CRUD over the sqlx pool, one module per table.
//! The store's single-row atomicity is the only consistency
//! mechanism; no repository call spans more than one statement
//! except re-reads after writes.

pub mod reservation;
pub mod restaurant;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

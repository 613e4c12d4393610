//! Database Module
//!
//! SQLite connection pool and embedded migrations.

pub mod repository;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Embedded migrations, also used directly by the test suites.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database service, owner of the store connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the store from its connection URL and apply migrations.
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        // WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: wait 5s on write contention instead of failing
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}

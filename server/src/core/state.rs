use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::restaurant;
use crate::utils::AppError;

/// Server state - shared by every request handler
///
/// Holds the immutable configuration and the store connection pool.
/// `Clone` is shallow (the pool is an `Arc` internally), so handlers
/// receive it by value through axum's `State` extractor instead of
/// any process-wide singleton.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Store connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Build state from existing parts (used by tests)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Initialize server state:
    ///
    /// 1. Open the store (pool + migrations)
    /// 2. Seed the single restaurant row when configured and absent
    /// 3. Warn when no restaurant exists - creates will fail with a
    ///    configuration error until one does
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        let pool = db.pool;

        match restaurant::find_first(&pool).await? {
            Some(r) => {
                tracing::info!("Serving reservations for restaurant '{}' ({})", r.name, r.id);
            }
            None => {
                if let Some(name) = &config.restaurant_name {
                    let r = restaurant::create(&pool, name).await?;
                    tracing::info!("Seeded restaurant '{}' ({})", r.name, r.id);
                } else {
                    tracing::warn!(
                        "No restaurant row found and RESTAURANT_NAME unset; \
                         reservation creation will fail until one exists"
                    );
                }
            }
        }

        Ok(Self::new(config.clone(), pool))
    }
}

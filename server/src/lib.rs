//! Yoyaku Server - restaurant reservation intake and review service
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/   # configuration, state, HTTP server
//! ├── api/    # routes and handlers
//! ├── db/     # connection pool, migrations, repositories
//! └── utils/  # errors, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use self::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;

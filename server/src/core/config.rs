/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_URL | sqlite:yoyaku.db | store endpoint (sqlx URL) |
/// | LIFF_ID | (unset) | external in-app-browser app identifier |
/// | RESTAURANT_NAME | (unset) | when set, seeds the single restaurant row on first start |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | daily rolling file output when set |
///
/// Loaded once at process start; there is no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Store connection URL
    pub database_url: String,
    /// External app identifier for the in-app-browser login
    /// integration. Consumed by clients; the server only passes it
    /// through.
    pub liff_id: Option<String>,
    /// Optional single-tenant seed: create this restaurant if the
    /// table is empty at startup
    pub restaurant_name: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:yoyaku.db".into()),
            liff_id: std::env::var("LIFF_ID").ok(),
            restaurant_name: std::env::var("RESTAURANT_NAME").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

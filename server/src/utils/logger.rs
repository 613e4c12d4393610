//! Logging Infrastructure
//!
//! tracing setup shared by the binary and any tooling.

/// Initialize the logger.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate
/// and tower_http. With `log_dir` set, output goes to a daily rolling
/// file instead of stderr.
pub fn init_logger(level: Option<&str>, log_dir: Option<&str>) {
    let level = level.unwrap_or("info");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("yoyaku_server={level},tower_http={level}"))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let file_appender = tracing_appender::rolling::daily(dir, "yoyaku-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}

use crate::config::LogSettings;

/// Initialize tracing/logging for the hub's host process.
///
/// This uses a simple `with_max_level` configuration based on the configured
/// log level.
pub fn init(settings: &LogSettings) {
    let lvl = match settings.level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };

    // Use try_init so tests and libraries can call this multiple times without panicking
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}

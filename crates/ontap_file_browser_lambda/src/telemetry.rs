use ontap_file_browser_core::settings::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;

/// Filter applied for each `LOG_LEVEL` value. The function never emits a
/// critical record, so `CRITICAL` silences everything.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::NotSet => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warning => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Critical => LevelFilter::OFF,
    }
}

/// Install the global JSON subscriber once per cold start.
pub fn init_logging(level: LogLevel) -> Result<(), String> {
    fmt::fmt()
        .json()
        .with_max_level(level_filter(level))
        .with_target(false)
        .with_current_span(false)
        .without_time()
        .try_init()
        .map_err(|err| format!("failed to install tracing subscriber: {err}"))
}

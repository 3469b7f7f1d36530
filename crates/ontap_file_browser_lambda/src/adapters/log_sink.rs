pub trait LogSink {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards handler log lines to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn debug(&self, message: &str) {
        tracing::debug!(component = "file_browser", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(component = "file_browser", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(component = "file_browser", "{message}");
    }
}

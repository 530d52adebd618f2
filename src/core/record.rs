//! Log record structure

use super::level::Severity;
use chrono::{DateTime, Local};

/// One emitted log message, before per-handler formatting.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Severity,
    pub logger: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    /// Rendered exception context, if the record was emitted from an
    /// error-handling scope. Handlers may refuse to forward this.
    pub exception: Option<String>,
}

impl LogRecord {
    pub fn new(level: Severity, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            logger: logger.into(),
            message: message.into(),
            timestamp: Local::now(),
            exception: None,
        }
    }

    #[must_use]
    pub fn with_exception(mut self, context: impl Into<String>) -> Self {
        self.exception = Some(context.into());
        self
    }
}

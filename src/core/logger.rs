//! Logger facade

use super::error::Result;
use super::level::Severity;
use super::record::LogRecord;
use super::registry::Registry;

/// The call surface. A logger is a named, stateless wrapper around a
/// [`Registry`]; all severity filtering and delivery happens in the
/// attached handlers.
pub struct Logger {
    name: String,
    registry: Registry,
}

impl Logger {
    pub fn new(name: impl Into<String>, registry: &Registry) -> Self {
        Self {
            name: name.into(),
            registry: registry.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Emit one record at `level`. Delivery errors from any handler
    /// propagate after every eligible handler has been attempted.
    pub fn log(&self, level: Severity, message: impl Into<String>) -> Result<()> {
        self.registry
            .dispatch(&LogRecord::new(level, self.name.as_str(), message), false)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Warning, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Error, message)
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Critical, message)
    }

    /// Emit at `Critical` with the error chain attached as exception
    /// context, for use inside an error-handling scope. Handlers that
    /// exclude exception context still receive the record, without the
    /// chain.
    pub fn exception(
        &self,
        message: impl Into<String>,
        error: &(dyn std::error::Error + 'static),
    ) -> Result<()> {
        let record = LogRecord::new(Severity::Critical, self.name.as_str(), message)
            .with_exception(render_error_chain(error));
        self.registry.dispatch(&record, false)
    }

    /// Send `message` to all handlers undecorated: each handler's format
    /// is overridden to message-only for this one call and observably
    /// restored afterwards. The record carries `Critical` severity so it
    /// passes every default band.
    pub fn print(&self, message: impl Into<String>) -> Result<()> {
        self.print_with_level(message, Severity::Critical)
    }

    /// [`print`](Logger::print) with an explicit simulated severity, for
    /// routing undecorated output through tighter bands.
    pub fn print_with_level(&self, message: impl Into<String>, level: Severity) -> Result<()> {
        self.registry
            .dispatch(&LogRecord::new(level, self.name.as_str(), message), true)
    }
}

fn render_error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

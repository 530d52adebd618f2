//! Record formatting
//!
//! A handler renders records through a plain placeholder template. The
//! recognized placeholders are `{time}`, `{name}`, `{level}` and
//! `{message}`; anything else in the template is written verbatim.

use super::record::LogRecord;
use chrono::{DateTime, Local};

/// Default text format for handlers.
pub const DEFAULT_TEMPLATE: &str = "[{time}] - {name} - {level}: {message}";

/// Format used by `Logger::print`: the bare message, nothing else.
pub const MESSAGE_ONLY_TEMPLATE: &str = "{message}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormat {
    template: String,
}

impl RecordFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn message_only() -> Self {
        Self::new(MESSAGE_ONLY_TEMPLATE)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render `record` through this template. Exception context, when
    /// present on the record, follows the rendered line on its own lines.
    pub fn render(&self, record: &LogRecord) -> String {
        render_template(&self.template, record)
    }
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

pub(crate) fn render_template(template: &str, record: &LogRecord) -> String {
    let mut line = template
        .replace("{time}", &format_timestamp(&record.timestamp))
        .replace("{name}", &record.logger)
        .replace("{level}", record.level.to_str())
        .replace("{message}", &record.message);
    if let Some(context) = &record.exception {
        line.push('\n');
        line.push_str(context);
    }
    line
}

/// `YYYY-MM-DD HH:MM:SS,mmm`, the comma-millisecond shape log readers of
/// this format family expect.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    format!(
        "{},{:03}",
        time.format("%Y-%m-%d %H:%M:%S"),
        time.timestamp_subsec_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Severity;

    fn record() -> LogRecord {
        LogRecord::new(Severity::Error, "app", "disk failed")
    }

    #[test]
    fn test_default_template() {
        let rendered = RecordFormat::default().render(&record());
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with("- app - ERROR: disk failed"));
    }

    #[test]
    fn test_message_only() {
        let rendered = RecordFormat::message_only().render(&record());
        assert_eq!(rendered, "disk failed");
    }

    #[test]
    fn test_custom_template_keeps_literal_text() {
        let format = RecordFormat::new("{level}|{message}|tail");
        assert_eq!(format.render(&record()), "ERROR|disk failed|tail");
    }

    #[test]
    fn test_exception_context_follows_line() {
        let record = record().with_exception("caused by: io error");
        let rendered = RecordFormat::message_only().render(&record);
        assert_eq!(rendered, "disk failed\ncaused by: io error");
    }

    #[test]
    fn test_timestamp_shape() {
        let rendered = format_timestamp(&Local::now());
        // e.g. 2026-08-06 12:34:56,789
        assert_eq!(rendered.len(), 23);
        assert_eq!(&rendered[19..20], ",");
    }
}

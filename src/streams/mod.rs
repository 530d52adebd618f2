//! Destination streams
//!
//! A destination stream is somewhere formatted log text can be written:
//! a wrapped terminal sink, a lazily-opened file, or a rotating crash
//! file. Each variant can emit a one-time startup banner before its first
//! real log line.

pub mod busy;
pub mod crash;
pub mod direct;
pub mod file;

pub use busy::{anchor_to_executable, is_file_busy};
pub use crash::CrashLogFile;
pub use direct::DirectStream;
pub use file::{FileOptions, LogFile, OnDemandFile};

use crate::core::error::Result;
use crate::core::format::format_timestamp;
use chrono::{DateTime, Local};
use std::sync::OnceLock;

/// The capability set every destination stream provides.
///
/// A stream never silently drops a write: `write` returns the number of
/// bytes handed to the sink, or an error.
pub trait LogStream: Send {
    fn write(&mut self, text: &str) -> Result<usize>;
    fn flush(&mut self) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

impl std::fmt::Debug for dyn LogStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<dyn LogStream>")
    }
}

/// Content of the one-time startup banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerConfig {
    pub app_name: String,
    pub suffix: String,
}

impl BannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

static PROGRAM_START: OnceLock<DateTime<Local>> = OnceLock::new();

/// Program start time as reported in banners, captured once per process.
pub fn program_start_time() -> DateTime<Local> {
    *PROGRAM_START.get_or_init(Local::now)
}

pub(crate) fn banner_line(config: &BannerConfig, log_start: DateTime<Local>) -> String {
    let app = if config.app_name.is_empty() {
        String::new()
    } else {
        format!("{} - ", config.app_name)
    };
    format!(
        "{}PID: {} - program start time: [{}] - log start time: [{}] {}\n",
        app,
        std::process::id(),
        format_timestamp(&program_start_time()),
        format_timestamp(&log_start),
        config.suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_line_with_app_name() {
        let config = BannerConfig::new()
            .with_app_name("packager")
            .with_suffix("(crash log)");
        let line = banner_line(&config, Local::now());
        assert!(line.starts_with("packager - PID: "));
        assert!(line.contains("program start time: ["));
        assert!(line.contains("log start time: ["));
        assert!(line.ends_with("(crash log)\n"));
    }

    #[test]
    fn test_banner_line_without_app_name() {
        let line = banner_line(&BannerConfig::new(), Local::now());
        assert!(line.starts_with("PID: "));
    }

    #[test]
    fn test_program_start_time_is_stable() {
        assert_eq!(program_start_time(), program_start_time());
    }
}

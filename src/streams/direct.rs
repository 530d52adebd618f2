//! Direct stream over an always-open sink

use super::{banner_line, BannerConfig, LogStream};
use crate::core::error::{LogError, Result};
use chrono::Local;
use std::io::Write;

/// Wraps an always-open sink (terminal, CI pipe). Writes pass straight
/// through and are flushed immediately; there is no deferred creation.
pub struct DirectStream {
    sink: Option<Box<dyn Write + Send>>,
    banner: Option<BannerConfig>,
}

impl DirectStream {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink: Some(sink), banner: None }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Emit the one-time startup banner before the first write.
    #[must_use]
    pub fn with_banner(mut self, banner: BannerConfig) -> Self {
        self.banner = Some(banner);
        self
    }

    fn sink(&mut self) -> Result<&mut (dyn Write + Send + 'static)> {
        self.sink
            .as_deref_mut()
            .ok_or_else(|| LogError::internal("write to closed stream"))
    }
}

impl LogStream for DirectStream {
    fn write(&mut self, text: &str) -> Result<usize> {
        if let Some(banner) = self.banner.take() {
            let line = banner_line(&banner, Local::now());
            self.sink()?.write_all(line.as_bytes())?;
        }
        let sink = self.sink()?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(text.len())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
        }
        Ok(())
    }
}

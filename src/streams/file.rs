//! File-backed destination streams
//!
//! [`LogFile`] opens eagerly and forces every write to durable storage
//! before returning. [`OnDemandFile`] defers everything (path
//! resolution, busy probe, separator, banner) until the first write, so
//! constructing a handler over it never touches the filesystem if no
//! record ever reaches it.

use super::busy::{anchor_to_executable, is_file_busy};
use super::{banner_line, BannerConfig, LogStream};
use crate::core::error::{LogError, Result};
use chrono::Local;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Construction options shared by the file-backed streams.
#[derive(Debug, Clone)]
pub struct FileOptions {
    /// Blank lines separating this run from prior content in the file.
    pub blank_lines: usize,
    /// One-time startup banner; `None` suppresses it.
    pub banner: Option<BannerConfig>,
    /// Delete any existing file before writing starts.
    pub clear_existing: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            blank_lines: 3,
            banner: Some(BannerConfig::default()),
            clear_existing: false,
        }
    }
}

impl FileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_blank_lines(mut self, blank_lines: usize) -> Self {
        self.blank_lines = blank_lines;
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: BannerConfig) -> Self {
        self.banner = Some(banner);
        self
    }

    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.banner = None;
        self
    }

    #[must_use]
    pub fn with_clear_existing(mut self, clear_existing: bool) -> Self {
        self.clear_existing = clear_existing;
        self
    }
}

/// An open, exclusively-held log file. Every write is appended, flushed
/// and synced before returning, trading throughput for the ability to
/// survive abrupt termination.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: Option<File>,
}

impl LogFile {
    /// Open `path` for appending, per the construction rules: resolve the
    /// path against the executable's directory, probe for a conflicting
    /// writer, optionally clear prior content, separate appended runs
    /// with blank lines, and write the banner when configured.
    ///
    /// # Errors
    ///
    /// [`LogError::FileBusy`] when the probe reports the file open
    /// elsewhere or its advisory lock cannot be taken;
    /// [`LogError::NotAFile`] when the path denotes a non-regular file.
    pub fn create(path: impl AsRef<Path>, options: &FileOptions) -> Result<Self> {
        let path = anchor_to_executable(path)?;

        if is_file_busy(&path)? {
            return Err(LogError::file_busy(path));
        }

        if options.clear_existing && path.exists() {
            fs::remove_file(&path)
                .map_err(|e| LogError::io_operation("clearing logfile", &path, e))?;
        }

        let had_content = fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::io_operation("opening logfile", &path, e))?;
        file.try_lock_exclusive()
            .map_err(|_| LogError::file_busy(&path))?;

        let mut stream = Self { path, file: Some(file) };

        if had_content && options.blank_lines > 0 {
            stream.write_durable(&"\n".repeat(options.blank_lines))?;
        }
        if let Some(banner) = &options.banner {
            stream.write_durable(&banner_line(banner, Local::now()))?;
        }

        Ok(stream)
    }

    /// The resolved, absolute path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Append, flush, and force to durable storage before returning.
    fn write_durable(&mut self, text: &str) -> Result<usize> {
        let Self { path, file } = self;
        let file = file
            .as_mut()
            .ok_or_else(|| LogError::internal("write to closed logfile"))?;
        file.write_all(text.as_bytes())
            .map_err(|e| LogError::io_operation("writing logfile", path.as_path(), e))?;
        file.flush()
            .map_err(|e| LogError::io_operation("flushing logfile", path.as_path(), e))?;
        file.sync_data()
            .map_err(|e| LogError::io_operation("syncing logfile", path.as_path(), e))?;
        Ok(text.len())
    }
}

impl LogStream for LogFile {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.write_durable(text)
    }

    fn flush(&mut self) -> Result<()> {
        let Self { path, file } = self;
        if let Some(file) = file.as_mut() {
            file.flush()
                .map_err(|e| LogError::io_operation("flushing logfile", path.as_path(), e))?;
            file.sync_data()
                .map_err(|e| LogError::io_operation("syncing logfile", path.as_path(), e))?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle releases the advisory lock.
        if let Some(file) = self.file.take() {
            file.sync_data()
                .map_err(|e| LogError::io_operation("syncing logfile", self.path.as_path(), e))?;
        }
        Ok(())
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_data();
        }
    }
}

/// Lazy variant of [`LogFile`]: stores the path and options, performs the
/// whole construction on the first write. `close` drops the inner file; a
/// later write re-opens lazily, appending.
pub struct OnDemandFile {
    path: PathBuf,
    options: FileOptions,
    stream: Option<LogFile>,
}

impl OnDemandFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, FileOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: FileOptions) -> Self {
        Self {
            path: path.into(),
            options,
            stream: None,
        }
    }

    /// The path as given at construction; resolution happens at first
    /// write.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    fn open(&mut self) -> Result<&mut LogFile> {
        if self.stream.is_none() {
            self.stream = Some(LogFile::create(&self.path, &self.options)?);
        }
        self.stream
            .as_mut()
            .ok_or_else(|| LogError::internal("lazy logfile failed to open"))
    }
}

impl LogStream for OnDemandFile {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.open()?.write(text)
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream.as_mut() {
            Some(stream) => stream.flush(),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.stream.take() {
            Some(mut stream) => stream.close(),
            None => Ok(()),
        }
    }
}

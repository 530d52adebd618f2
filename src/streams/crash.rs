//! Rotating crash-file stream
//!
//! Each instance picks a fresh numbered file on its first write by
//! scanning the prefix's directory for `prefix<digits>suffix` siblings
//! and incrementing the largest number found, so crash logs form a
//! strictly increasing sequence across process restarts.

use super::busy::anchor_to_executable;
use super::file::{FileOptions, LogFile};
use super::LogStream;
use crate::core::error::{LogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A destination stream that selects a fresh `prefix<number>suffix` file
/// per construction. The number is fixed for the instance's lifetime.
///
/// Sibling comparison is lexicographic over the full file name, which is
/// only well defined while every matching sibling uses the same digit
/// width; leftovers from a run configured with a different width can win
/// the comparison and skew the sequence.
pub struct CrashLogFile {
    prefix: PathBuf,
    suffix: String,
    digits: usize,
    options: FileOptions,
    stream: Option<LogFile>,
}

impl CrashLogFile {
    pub const DEFAULT_DIGITS: usize = 3;

    pub fn new(prefix: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            digits: Self::DEFAULT_DIGITS,
            options: FileOptions::default(),
            stream: None,
        }
    }

    /// Zero-padded width of the numeric field in generated file names.
    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Path of the crash file this instance opened, once the first write
    /// has happened.
    pub fn current_path(&self) -> Option<&Path> {
        self.stream.as_ref().map(LogFile::path)
    }

    fn next_crash_path(&self) -> Result<PathBuf> {
        let prefix = anchor_to_executable(&self.prefix)?;
        let dir = prefix
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let stem = prefix
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let number = match last_sibling_number(&dir, &stem, &self.suffix)? {
            Some(last) => last + 1,
            None => 1,
        };

        Ok(dir.join(format!(
            "{}{:0width$}{}",
            stem,
            number,
            self.suffix,
            width = self.digits
        )))
    }
}

/// Number embedded in the lexicographically greatest `stem<digits>suffix`
/// sibling, if any.
fn last_sibling_number(dir: &Path, stem: &str, suffix: &str) -> Result<Option<u64>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(None),
    };

    let mut greatest: Option<String> = None;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let middle = match name.strip_prefix(stem).and_then(|r| r.strip_suffix(suffix)) {
            Some(middle) => middle,
            None => continue,
        };
        if middle.is_empty() || !middle.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if greatest.as_deref().map_or(true, |g| name.as_str() > g) {
            greatest = Some(name);
        }
    }

    match greatest {
        None => Ok(None),
        Some(name) => {
            let middle = name
                .strip_prefix(stem)
                .and_then(|r| r.strip_suffix(suffix))
                .ok_or_else(|| LogError::internal("crash sibling lost its affixes"))?;
            middle
                .parse::<u64>()
                .map(Some)
                .map_err(|e| LogError::internal(format!("unparsable crash number in '{}': {}", name, e)))
        }
    }
}

impl LogStream for CrashLogFile {
    fn write(&mut self, text: &str) -> Result<usize> {
        if self.stream.is_none() {
            let path = self.next_crash_path()?;
            // A busy computed path surfaces FileBusy, never a silently
            // different number.
            self.stream = Some(LogFile::create(&path, &self.options)?);
        }
        self.stream
            .as_mut()
            .ok_or_else(|| LogError::internal("crash logfile failed to open"))?
            .write(text)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn plain() -> FileOptions {
        FileOptions::new().without_banner()
    }

    #[test]
    fn test_first_crash_file_is_number_one() {
        let dir = tempdir().unwrap();
        let mut stream =
            CrashLogFile::new(dir.path().join("crash_"), ".log").with_options(plain());

        stream.write("boom\n").unwrap();

        let expected = dir.path().join("crash_001.log");
        assert_eq!(stream.current_path(), Some(expected.as_path()));
        assert_eq!(fs::read_to_string(expected).unwrap(), "boom\n");
    }

    #[test]
    fn test_continues_existing_sequence() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("crash_001.log"), "first").unwrap();
        fs::write(dir.path().join("crash_002.log"), "second").unwrap();

        let mut stream =
            CrashLogFile::new(dir.path().join("crash_"), ".log").with_options(plain());
        stream.write("third\n").unwrap();

        assert!(dir.path().join("crash_003.log").exists());
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("crash_notes.txt"), "n/a").unwrap();
        fs::write(dir.path().join("other_005.log"), "n/a").unwrap();
        fs::write(dir.path().join("crash_x7.log"), "n/a").unwrap();

        let mut stream =
            CrashLogFile::new(dir.path().join("crash_"), ".log").with_options(plain());
        stream.write("boom\n").unwrap();

        assert!(dir.path().join("crash_001.log").exists());
    }

    #[test]
    fn test_number_fixed_for_instance_lifetime() {
        let dir = tempdir().unwrap();
        let mut stream =
            CrashLogFile::new(dir.path().join("crash_"), ".log").with_options(plain());

        stream.write("one\n").unwrap();
        stream.write("two\n").unwrap();

        let path = dir.path().join("crash_001.log");
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        assert!(!dir.path().join("crash_002.log").exists());
    }

    #[test]
    fn test_digit_width_is_configurable() {
        let dir = tempdir().unwrap();
        let mut stream = CrashLogFile::new(dir.path().join("crash_"), ".log")
            .with_digits(5)
            .with_options(plain());

        stream.write("boom\n").unwrap();
        assert!(dir.path().join("crash_00001.log").exists());
    }
}

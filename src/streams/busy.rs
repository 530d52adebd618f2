//! File-exclusivity probe and log path anchoring

use crate::core::error::{LogError, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Best-effort advisory probe for whether `path` is already open for
/// writing elsewhere.
///
/// A missing path is not busy; an existing path that is not a regular
/// file fails with [`LogError::NotAFile`]. Otherwise the probe attempts
/// an atomic no-op rename of the path onto itself (refused by platforms
/// that hold open log files exclusively), then a non-destructive
/// exclusive advisory lock (refused while another cooperating writer,
/// such as an open [`LogFile`](super::LogFile), holds the file).
///
/// The result is advisory. A writer that neither locks the file nor
/// makes the self-rename fail is not detected; callers must treat a
/// `false` as "no conflict observed", not as a guarantee.
pub fn is_file_busy(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let metadata = fs::metadata(path)
        .map_err(|e| LogError::io_operation("inspecting logfile", path, e))?;
    if !metadata.is_file() {
        return Err(LogError::not_a_file(path));
    }

    if fs::rename(path, path).is_err() {
        return Ok(true);
    }

    let probe = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| LogError::io_operation("probing logfile", path, e))?;
    if probe.try_lock_exclusive().is_err() {
        return Ok(true);
    }
    let _ = FileExt::unlock(&probe);
    Ok(false)
}

/// Resolve a possibly-relative path against the running executable's
/// directory, so log files land in a stable place regardless of the
/// caller's working directory.
pub fn anchor_to_executable(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let exe = std::env::current_exe()
        .map_err(|e| LogError::io_operation("locating executable for", path, e))?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(path))
}

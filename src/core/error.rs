//! Error types for the logging core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A path expected to denote a log file exists but is not a regular file
    #[error("path '{}' is not a file", .path.display())]
    NotAFile { path: PathBuf },

    /// The target log file is already open elsewhere
    #[error("logfile '{}' is already busy", .path.display())]
    FileBusy { path: PathBuf },

    /// Operation attempted on a handler after its irreversible detach
    #[error("handler is detached")]
    HandlerDetached,

    /// Invariant violation inside the dispatch or formatting pipeline
    #[error("internal error: {0}")]
    Internal(String),

    /// IO error with path context
    #[error("IO error while {} '{}': {}", .operation, .path.display(), .source)]
    IoOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create a not-a-file error for the given path
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        LogError::NotAFile { path: path.into() }
    }

    /// Create a busy-file error for the given path
    pub fn file_busy(path: impl Into<PathBuf>) -> Self {
        LogError::FileBusy { path: path.into() }
    }

    /// Create an internal invariant-violation error
    pub fn internal(message: impl Into<String>) -> Self {
        LogError::Internal(message.into())
    }

    /// Create an IO error carrying the operation and path it failed on
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        LogError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::file_busy("/var/log/app.log");
        assert!(matches!(err, LogError::FileBusy { .. }));

        let err = LogError::not_a_file("/var/log");
        assert!(matches!(err, LogError::NotAFile { .. }));

        let err = LogError::internal("inconsistent filter state");
        assert!(matches!(err, LogError::Internal(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::file_busy("/var/log/app.log");
        assert_eq!(err.to_string(), "logfile '/var/log/app.log' is already busy");

        assert_eq!(LogError::HandlerDetached.to_string(), "handler is detached");

        let err = LogError::internal("zero-byte write");
        assert_eq!(err.to_string(), "internal error: zero-byte write");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LogError::io_operation("opening logfile", "/var/log/app.log", io_err);

        assert!(matches!(err, LogError::IoOperation { .. }));
        assert!(err.to_string().contains("opening logfile"));
        assert!(err.to_string().contains("/var/log/app.log"));
    }
}

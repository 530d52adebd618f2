//! Logging macros for ergonomic message formatting.
//!
//! Each macro expands to the corresponding [`Logger`](crate::Logger)
//! method call, so the returned `Result` can be propagated with `?`.
//!
//! # Examples
//!
//! ```
//! use logmux::prelude::*;
//! use logmux::info;
//!
//! let registry = Registry::new();
//! let logger = Logger::new("server", &registry);
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit severity with automatic formatting.
///
/// ```
/// # use logmux::prelude::*;
/// # let registry = Registry::new();
/// # let logger = Logger::new("app", &registry);
/// use logmux::log;
/// log!(logger, Severity::Error, "exit code {}", 3).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

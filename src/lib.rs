//! # Logmux
//!
//! A small logging framework that multiplexes log records to multiple
//! destinations (terminal streams, on-demand files, auto-rotating crash
//! files), each independently filtered by a severity band.
//!
//! ## Features
//!
//! - **Severity Bands**: Per-handler minimum *and* maximum severity, so
//!   each destination can receive exactly the band it wants
//! - **On-Demand Files**: File streams that touch the filesystem only
//!   once a record actually reaches them, then force every write to
//!   durable storage
//! - **Crash-Log Rotation**: Numbered crash files that form a strictly
//!   increasing sequence across process restarts
//! - **Busy Probing**: Advisory detection of log files already open in
//!   another process

pub mod core;
pub mod macros;
pub mod streams;

pub mod prelude {
    pub use crate::core::{
        Handler, HandlerConfig, LogError, LogRecord, Logger, RecordFormat, Registry, Result,
        Severity,
    };
    pub use crate::streams::{
        BannerConfig, CrashLogFile, DirectStream, FileOptions, LogFile, LogStream, OnDemandFile,
    };
}

pub use crate::core::{
    Handler, HandlerConfig, LogError, LogRecord, Logger, RecordFormat, Registry, Result, Severity,
    DEFAULT_TEMPLATE, MESSAGE_ONLY_TEMPLATE,
};
pub use crate::streams::{
    is_file_busy, BannerConfig, CrashLogFile, DirectStream, FileOptions, LogFile, LogStream,
    OnDemandFile,
};

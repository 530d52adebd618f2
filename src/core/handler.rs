//! Handler lifecycle and configuration
//!
//! A handler binds one destination stream to a severity band, a text
//! format, and an exception-context policy. Constructing one registers
//! it, already enabled, against a [`Registry`]; detaching removes it for
//! good and hands the stream back.

use super::error::Result;
use super::format::RecordFormat;
use super::level::Severity;
use super::registry::Registry;
use crate::streams::LogStream;

/// Filter and format configuration a handler is constructed with.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Records below this severity are dropped.
    pub min_level: Severity,
    /// Records above this severity are dropped; `Critical` means
    /// unbounded.
    pub max_level: Severity,
    pub format: RecordFormat,
    /// Whether captured exception context is forwarded to the stream.
    pub include_exception_context: bool,
}

impl HandlerConfig {
    pub fn new(min_level: Severity) -> Self {
        Self {
            min_level,
            max_level: Severity::Critical,
            format: RecordFormat::default(),
            include_exception_context: true,
        }
    }

    #[must_use]
    pub fn with_max_level(mut self, max_level: Severity) -> Self {
        self.max_level = max_level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_exception_context(mut self, include: bool) -> Self {
        self.include_exception_context = include;
        self
    }
}

/// Handle to a registered handler. All state lives in the registry slot;
/// after [`detach`](Handler::detach) every operation through the handle
/// fails with [`LogError::HandlerDetached`](super::LogError::HandlerDetached).
pub struct Handler {
    id: u64,
    registry: Registry,
}

impl Handler {
    /// Register `stream` under `config` and enable it immediately.
    /// Attach order is dispatch order.
    pub fn attach(registry: &Registry, stream: Box<dyn LogStream>, config: HandlerConfig) -> Self {
        let id = registry.register(stream, config);
        Self {
            id,
            registry: registry.clone(),
        }
    }

    /// Idempotent; a disabled handler stays registered.
    pub fn enable(&self) -> Result<()> {
        self.registry.with_slot(self.id, |slot| slot.enabled = true)
    }

    /// Idempotent; the handler stops receiving records but remains
    /// attached.
    pub fn disable(&self) -> Result<()> {
        self.registry.with_slot(self.id, |slot| slot.enabled = false)
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.registry.with_slot(self.id, |slot| slot.enabled)
    }

    pub fn set_min_level(&self, level: Severity) -> Result<()> {
        self.registry
            .with_slot(self.id, |slot| slot.config.min_level = level)
    }

    pub fn min_level(&self) -> Result<Severity> {
        self.registry.with_slot(self.id, |slot| slot.config.min_level)
    }

    pub fn set_max_level(&self, level: Severity) -> Result<()> {
        self.registry
            .with_slot(self.id, |slot| slot.config.max_level = level)
    }

    pub fn max_level(&self) -> Result<Severity> {
        self.registry.with_slot(self.id, |slot| slot.config.max_level)
    }

    pub fn set_format(&self, format: RecordFormat) -> Result<()> {
        self.registry
            .with_slot(self.id, |slot| slot.config.format = format)
    }

    pub fn format(&self) -> Result<RecordFormat> {
        self.registry
            .with_slot(self.id, |slot| slot.config.format.clone())
    }

    pub fn set_exception_context(&self, include: bool) -> Result<()> {
        self.registry
            .with_slot(self.id, |slot| slot.config.include_exception_context = include)
    }

    pub fn includes_exception_context(&self) -> Result<bool> {
        self.registry
            .with_slot(self.id, |slot| slot.config.include_exception_context)
    }

    pub fn is_attached(&self) -> bool {
        self.registry.contains(self.id)
    }

    /// Irreversibly remove the handler from the registry and hand the
    /// destination stream back. A second call fails with
    /// `HandlerDetached`.
    pub fn detach(&self) -> Result<Box<dyn LogStream>> {
        self.registry.remove(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{LogError, Result as LogResult};

    struct Null;
    impl LogStream for Null {
        fn write(&mut self, text: &str) -> LogResult<usize> {
            Ok(text.len())
        }
        fn flush(&mut self) -> LogResult<()> {
            Ok(())
        }
        fn close(&mut self) -> LogResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_attach_enables_immediately() {
        let registry = Registry::new();
        let handler = Handler::attach(&registry, Box::new(Null), HandlerConfig::new(Severity::Info));

        assert!(handler.is_attached());
        assert!(handler.is_enabled().unwrap());
        assert_eq!(registry.handler_count(), 1);
    }

    #[test]
    fn test_enable_disable_are_idempotent() {
        let registry = Registry::new();
        let handler = Handler::attach(&registry, Box::new(Null), HandlerConfig::new(Severity::Info));

        handler.disable().unwrap();
        handler.disable().unwrap();
        assert!(!handler.is_enabled().unwrap());
        assert_eq!(registry.handler_count(), 1);

        handler.enable().unwrap();
        handler.enable().unwrap();
        assert!(handler.is_enabled().unwrap());
    }

    #[test]
    fn test_level_and_format_mutation() {
        let registry = Registry::new();
        let handler = Handler::attach(&registry, Box::new(Null), HandlerConfig::new(Severity::Info));

        handler.set_min_level(Severity::Warning).unwrap();
        handler.set_max_level(Severity::Warning).unwrap();
        assert_eq!(handler.min_level().unwrap(), Severity::Warning);
        assert_eq!(handler.max_level().unwrap(), Severity::Warning);

        handler.set_format(RecordFormat::new("{message}")).unwrap();
        assert_eq!(handler.format().unwrap().template(), "{message}");

        handler.set_exception_context(false).unwrap();
        assert!(!handler.includes_exception_context().unwrap());
    }

    #[test]
    fn test_detach_returns_stream_and_is_final() {
        let registry = Registry::new();
        let handler = Handler::attach(&registry, Box::new(Null), HandlerConfig::new(Severity::Info));

        let _stream = handler.detach().unwrap();
        assert!(!handler.is_attached());
        assert_eq!(registry.handler_count(), 0);

        assert!(matches!(handler.detach().unwrap_err(), LogError::HandlerDetached));
        assert!(matches!(handler.enable().unwrap_err(), LogError::HandlerDetached));
        assert!(matches!(
            handler.set_min_level(Severity::Debug).unwrap_err(),
            LogError::HandlerDetached
        ));
    }
}

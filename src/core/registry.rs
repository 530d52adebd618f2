//! Process-wide handler registry
//!
//! Handler state lives here; the public [`Handler`](super::Handler) is a
//! handle into a slot. The registry is an explicit, injectable object
//! rather than a global, so isolated registries can coexist in one
//! process (one per test, typically).

use super::error::{LogError, Result};
use super::format::{render_template, MESSAGE_ONLY_TEMPLATE};
use super::handler::HandlerConfig;
use super::record::LogRecord;
use crate::streams::LogStream;
use parking_lot::Mutex;
use std::sync::Arc;

pub(crate) struct HandlerSlot {
    pub(crate) id: u64,
    pub(crate) enabled: bool,
    pub(crate) config: HandlerConfig,
    pub(crate) stream: Box<dyn LogStream>,
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    slots: Vec<HandlerSlot>,
    no_handlers_warned: bool,
    no_handler_warnings: u64,
}

/// The collection of constructed, non-detached handlers. Cheap to clone;
/// clones share the same state.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered (attached) handlers, enabled or not.
    pub fn handler_count(&self) -> usize {
        self.inner.lock().slots.len()
    }

    pub fn has_enabled_handler(&self) -> bool {
        self.inner.lock().slots.iter().any(|slot| slot.enabled)
    }

    /// How many times the one-time "no active handlers" warning has been
    /// issued so far.
    pub fn no_handler_warning_count(&self) -> u64 {
        self.inner.lock().no_handler_warnings
    }

    pub(crate) fn register(&self, stream: Box<dyn LogStream>, config: HandlerConfig) -> u64 {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.slots.push(HandlerSlot {
            id,
            enabled: true,
            config,
            stream,
        });
        id
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.inner.lock().slots.iter().any(|slot| slot.id == id)
    }

    pub(crate) fn with_slot<R>(
        &self,
        id: u64,
        f: impl FnOnce(&mut HandlerSlot) -> R,
    ) -> Result<R> {
        let mut inner = self.inner.lock();
        let slot = inner
            .slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or(LogError::HandlerDetached)?;
        Ok(f(slot))
    }

    pub(crate) fn remove(&self, id: u64) -> Result<Box<dyn LogStream>> {
        let mut inner = self.inner.lock();
        let position = inner
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or(LogError::HandlerDetached)?;
        Ok(inner.slots.remove(position).stream)
    }

    /// Deliver `record` to every enabled handler whose severity band
    /// admits it, in attach order. Every eligible handler is attempted
    /// even when an earlier one fails; the first error is returned
    /// afterwards.
    ///
    /// `message_only` replaces each handler's configured format with the
    /// bare-message template for this one delivery.
    pub(crate) fn dispatch(&self, record: &LogRecord, message_only: bool) -> Result<()> {
        let mut inner = self.inner.lock();
        let inner = &mut *inner;

        // Edge-triggered: warn once while nothing is enabled, re-arm as
        // soon as an enabled handler is observed again.
        if inner.slots.iter().any(|slot| slot.enabled) {
            inner.no_handlers_warned = false;
        } else if !inner.no_handlers_warned {
            eprintln!("[LOGGER WARNING] logger has no active handlers");
            inner.no_handlers_warned = true;
            inner.no_handler_warnings += 1;
        }

        let mut first_error = None;
        for slot in inner.slots.iter_mut() {
            if !slot.enabled
                || record.level < slot.config.min_level
                || record.level > slot.config.max_level
            {
                continue;
            }
            if let Err(e) = deliver(slot, record, message_only) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn deliver(slot: &mut HandlerSlot, record: &LogRecord, message_only: bool) -> Result<()> {
    let template = if message_only {
        MESSAGE_ONLY_TEMPLATE
    } else {
        slot.config.format.template()
    };

    // When exception context is excluded the stream must never see it,
    // independent of the template.
    let mut line = if slot.config.include_exception_context || record.exception.is_none() {
        render_template(template, record)
    } else {
        let mut stripped = record.clone();
        stripped.exception = None;
        render_template(template, &stripped)
    };
    line.push('\n');

    let written = slot.stream.write(&line)?;
    if written == 0 {
        return Err(LogError::internal("destination stream dropped a write"));
    }
    slot.stream.flush()
}

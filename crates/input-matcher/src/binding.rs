//! The owned key-stream subscription handle.

use toasty_common::error::ToastyResult;
use toasty_effect_model::event::KeyEvent;

use crate::KeySource;

/// An active subscription to a key source.
///
/// Owning a `KeyBinding` is what it means to be "listening": dropping
/// it releases the source deterministically, so rebinding with an
/// empty sequence detaches the listener rather than leaking it.
pub struct KeyBinding {
    source: Box<dyn KeySource>,
}

impl KeyBinding {
    /// Take ownership of a source, starting the subscription.
    pub fn new(source: Box<dyn KeySource>) -> Self {
        tracing::debug!(source = source.name(), "key binding attached");
        Self { source }
    }

    /// Poll the underlying source for the next event.
    pub fn poll(&mut self) -> ToastyResult<Option<KeyEvent>> {
        self.source.poll()
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Whether the underlying source can still produce events.
    pub fn is_available(&self) -> bool {
        self.source.is_available()
    }
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        tracing::debug!(source = self.source.name(), "key binding released");
    }
}

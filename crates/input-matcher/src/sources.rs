//! Key source implementations.
//!
//! Each source provides a different way to receive host key events.

use std::sync::mpsc::{Receiver, TryRecvError};

use toasty_common::error::ToastyResult;
use toasty_effect_model::event::KeyEvent;

use crate::KeySource;

/// Receives key events from an in-process channel.
///
/// The host side keeps the [`std::sync::mpsc::Sender`] and stamps
/// events with its effect-clock timestamps. Once the sender is
/// dropped, the source reports itself unavailable.
pub struct ChannelSource {
    rx: Receiver<KeyEvent>,
    disconnected: bool,
}

impl ChannelSource {
    /// Create a source over a channel receiver.
    pub fn new(rx: Receiver<KeyEvent>) -> Self {
        Self {
            rx,
            disconnected: false,
        }
    }
}

impl KeySource for ChannelSource {
    fn poll(&mut self) -> ToastyResult<Option<KeyEvent>> {
        if self.disconnected {
            return Ok(None);
        }
        match self.rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("key channel disconnected, source exhausted");
                self.disconnected = true;
                Ok(None)
            }
        }
    }

    fn name(&self) -> &str {
        "channel"
    }

    fn is_available(&self) -> bool {
        !self.disconnected
    }
}

/// Stub source for testing — replays scripted events.
pub struct StubSource {
    events: Vec<KeyEvent>,
    index: usize,
}

impl StubSource {
    /// Create a stub source with pre-loaded events.
    pub fn new(events: Vec<KeyEvent>) -> Self {
        Self { events, index: 0 }
    }

    /// Create an empty stub that never produces events.
    pub fn empty() -> Self {
        Self {
            events: vec![],
            index: 0,
        }
    }
}

impl KeySource for StubSource {
    fn poll(&mut self) -> ToastyResult<Option<KeyEvent>> {
        if self.index < self.events.len() {
            let event = self.events[self.index];
            self.index += 1;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn is_available(&self) -> bool {
        true
    }
}

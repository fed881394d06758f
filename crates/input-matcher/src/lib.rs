//! Toasty Input Matcher
//!
//! Recognizes a fixed ordered key-code sequence arriving one code at a
//! time, with a per-step timeout that discards partial progress. Uses a
//! pluggable source architecture so the key stream can come from any
//! host:
//!
//! - **Channel:** An mpsc-fed source for in-process host integration
//! - **Stub:** Scripted events for tests
//!
//! The matcher itself is a pure state machine: timestamps are inputs,
//! and expiry is applied lazily at the next observation or poll.

pub mod binding;
pub mod matcher;
pub mod sources;

use toasty_common::error::ToastyResult;
use toasty_effect_model::event::KeyEvent;

pub use binding::KeyBinding;
pub use matcher::{MatchOutcome, SequenceMatcher, DEFAULT_STEP_TIMEOUT_MS};
pub use sources::{ChannelSource, StubSource};

/// Trait for key input sources.
pub trait KeySource: Send {
    /// Poll for the next key event. Returns `None` if no event is available.
    fn poll(&mut self) -> ToastyResult<Option<KeyEvent>>;

    /// Source name for logging.
    fn name(&self) -> &str;

    /// Check if the source can still produce events.
    fn is_available(&self) -> bool;
}

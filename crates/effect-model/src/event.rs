//! Key input event types for the trigger stream.
//!
//! All timestamps are monotonic milliseconds on the runtime's effect
//! timeline. Codes follow the host's key-code numbering (the default
//! trigger sequence uses the classic arrow/letter codes).

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in milliseconds since timeline start.
pub type TimestampMs = u64;

/// A single key input event with timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Monotonic milliseconds since timeline start.
    #[serde(rename = "t")]
    pub timestamp_ms: TimestampMs,

    /// Host key code.
    pub code: u32,

    /// Press or release.
    pub state: KeyState,
}

/// Key press state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    Down,
    Up,
}

impl KeyEvent {
    /// Create a key-down event.
    pub fn down(timestamp_ms: TimestampMs, code: u32) -> Self {
        Self {
            timestamp_ms,
            code,
            state: KeyState::Down,
        }
    }

    /// Create a key-up event.
    pub fn up(timestamp_ms: TimestampMs, code: u32) -> Self {
        Self {
            timestamp_ms,
            code,
            state: KeyState::Up,
        }
    }

    /// Timestamp as fractional seconds since timeline start.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ms as f64 / 1_000.0
    }

    /// Whether this is a release event (the matcher observes releases).
    pub fn is_release(&self) -> bool {
        self.state == KeyState::Up
    }
}

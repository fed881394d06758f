//! Cancellation handles for running tweens.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const RUNNING: u8 = 0;
const CANCELLED: u8 = 1;
const COMPLETED: u8 = 2;

/// Lifecycle state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Running,
    Cancelled,
    Completed,
}

/// Shared handle to a running tween.
///
/// The caller keeps a clone and may cancel at any point; the tween
/// checks the handle on every tick, so cancellation is race-free
/// rather than an external discard-the-ticker hack. Once a tween is
/// cancelled or completed its state never changes again.
#[derive(Debug, Clone)]
pub struct TweenHandle {
    state: Arc<AtomicU8>,
}

impl TweenHandle {
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicU8::new(RUNNING)),
        }
    }

    /// Request cancellation. Returns true if the tween was still
    /// running; cancelling a finished tween is a no-op.
    pub fn cancel(&self) -> bool {
        self.state
            .compare_exchange(RUNNING, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TweenState {
        match self.state.load(Ordering::SeqCst) {
            CANCELLED => TweenState::Cancelled,
            COMPLETED => TweenState::Completed,
            _ => TweenState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == TweenState::Running
    }

    pub fn is_cancelled(&self) -> bool {
        self.state() == TweenState::Cancelled
    }

    pub fn is_completed(&self) -> bool {
        self.state() == TweenState::Completed
    }

    /// Mark completed. Only the owning tween calls this, and only from
    /// the running state.
    pub(crate) fn complete(&self) -> bool {
        self.state
            .compare_exchange(RUNNING, COMPLETED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

impl Default for TweenHandle {
    fn default() -> Self {
        Self::new()
    }
}

//! Toasty Tween Engine
//!
//! Interpolates one numeric style value over the effect timeline:
//! an immediate sample at elapsed zero, then one sample per fixed
//! step, ending with exactly one completion signal at or after the
//! nominal duration.
//!
//! This crate is pure computation — no I/O, no timers, no platform
//! dependencies. All inputs are data; all outputs are data. A driver
//! (the trigger runtime) owns the cadence and the style writes.

pub mod handle;
pub mod registry;
pub mod tween;

pub use handle::{TweenHandle, TweenState};
pub use registry::{ActiveTweens, SurfaceId};
pub use tween::{resolve_easing, Tick, TweenSpec, Tweener, DEFAULT_DURATION_MS, DEFAULT_STEP_MS};

//! Toasty Effect Model
//!
//! Defines the core data contracts for the Toasty effect:
//! - **Events:** Timestamped key input events
//! - **Sequences:** Ordered trigger code sequences
//! - **Easing:** The easing-curve registry for tween motion
//! - **Values:** The typed style-value grammar for tween targets
//!
//! This crate is pure data — no I/O, no timers, no platform coupling.

pub mod easing;
pub mod event;
pub mod sequence;
pub mod value;

pub use easing::*;
pub use event::*;
pub use sequence::*;
pub use value::*;

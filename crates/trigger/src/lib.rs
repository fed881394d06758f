//! Toasty Trigger
//!
//! The orchestration layer of the Toasty effect. Watches a key stream
//! for the configured trigger sequence, then runs one effect cycle:
//!
//! ```text
//! Idle ──trigger──► SlidingIn ──tween done──► Holding
//!   ▲                                            │
//!   └── detach ◄── SlidingOut ◄── hold elapsed ──┘
//! ```
//!
//! The host supplies the visual surface, the audio sink, and the
//! image asset through traits; the engine itself is a deterministic,
//! timestamp-driven state machine, and the runtime wraps it in a
//! cooperative polling loop.

pub mod asset;
pub mod audio;
pub mod engine;
pub mod runtime;
pub mod surface;

pub use asset::ImageAsset;
pub use audio::{AudioSink, NullAudio, RecordingAudio};
pub use engine::{EffectEngine, Phase};
pub use runtime::EffectRuntime;
pub use surface::{RecordingSurface, Surface};

//! The single-property tween sampler.

use toasty_common::error::{ToastyError, ToastyResult};
use toasty_effect_model::easing::Easing;
use toasty_effect_model::event::TimestampMs;
use toasty_effect_model::value::{Sign, StyleDelta};

use crate::handle::TweenHandle;

/// Default phase duration (ms).
pub const DEFAULT_DURATION_MS: u64 = 360;

/// Fixed internal sampling step (ms).
pub const DEFAULT_STEP_MS: u64 = 17;

/// Look up an easing curve by name, falling back to linear.
pub fn resolve_easing(name: &str) -> Easing {
    Easing::from_name(name).unwrap_or_else(|| {
        tracing::warn!(name, "unknown easing name, falling back to linear");
        Easing::Linear
    })
}

/// One tween phase: target property, delta, timing, and curve.
///
/// Created fresh for each animation phase and owned solely by the
/// running [`Tweener`].
#[derive(Debug, Clone)]
pub struct TweenSpec {
    /// Style property the samples are written to.
    pub property: String,
    /// Parsed target value.
    pub delta: StyleDelta,
    /// Nominal phase duration (ms).
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
    /// Sampling step (ms).
    pub step_ms: u64,
}

impl TweenSpec {
    /// Create a spec with default duration, step, and linear easing.
    pub fn new(property: impl Into<String>, delta: StyleDelta) -> Self {
        Self {
            property: property.into(),
            delta,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::Linear,
            step_ms: DEFAULT_STEP_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check the spec describes a runnable tween.
    pub fn validate(&self) -> ToastyResult<()> {
        if self.property.is_empty() {
            return Err(ToastyError::tween("tween property name is empty"));
        }
        if self.duration_ms == 0 {
            return Err(ToastyError::tween("tween duration must be positive"));
        }
        if self.step_ms == 0 {
            return Err(ToastyError::tween("tween step must be positive"));
        }
        let magnitude = self.delta.magnitude();
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(ToastyError::tween(format!(
                "tween magnitude {magnitude} is not a non-negative finite number"
            )));
        }
        Ok(())
    }
}

/// Result of one scheduled tween tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// An intermediate sample to write to the target property.
    Sample(f64),
    /// The final sample; written like any other, then the phase is
    /// complete. Produced exactly once.
    Finished(f64),
    /// The handle was cancelled; nothing further will be produced and
    /// completion is never signalled.
    Cancelled,
    /// The tween already finished; the driver should have stopped.
    Exhausted,
}

/// Samples one tween phase over the effect timeline.
///
/// The first [`tick`](Tweener::tick) samples elapsed time zero; each
/// later tick advances by one step. The tick that reaches or passes
/// the nominal duration yields [`Tick::Finished`].
#[derive(Debug)]
pub struct Tweener {
    spec: TweenSpec,
    handle: TweenHandle,
    elapsed_ms: TimestampMs,
    /// Normalized time of the last scheduled tick, compensating for
    /// that tick overshooting the nominal duration.
    start_correction: f64,
    primed: bool,
    finished: bool,
}

impl Tweener {
    /// Validate a spec and prepare it for sampling.
    pub fn new(spec: TweenSpec) -> ToastyResult<Self> {
        spec.validate()?;
        let last_tick_ms = spec.duration_ms.div_ceil(spec.step_ms) * spec.step_ms;
        let start_correction = last_tick_ms as f64 / spec.duration_ms as f64;
        Ok(Self {
            spec,
            handle: TweenHandle::new(),
            elapsed_ms: 0,
            start_correction,
            primed: false,
            finished: false,
        })
    }

    /// A shared handle for cancelling this tween.
    pub fn handle(&self) -> TweenHandle {
        self.handle.clone()
    }

    /// The target property name.
    pub fn property(&self) -> &str {
        &self.spec.property
    }

    /// The unit suffix for style writes.
    pub fn unit(&self) -> &str {
        self.spec.delta.unit()
    }

    /// The sampling step (ms).
    pub fn step_ms(&self) -> u64 {
        self.spec.step_ms
    }

    /// Elapsed sampled time (ms).
    pub fn elapsed_ms(&self) -> TimestampMs {
        self.elapsed_ms
    }

    /// Whether the tween has finished or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Produce the next scheduled sample.
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Exhausted;
        }
        if self.handle.is_cancelled() {
            self.finished = true;
            return Tick::Cancelled;
        }

        if self.primed {
            self.elapsed_ms += self.spec.step_ms;
        } else {
            self.primed = true;
        }

        let value = self.sample_at(self.elapsed_ms);
        if self.elapsed_ms >= self.spec.duration_ms {
            self.finished = true;
            self.handle.complete();
            Tick::Finished(value)
        } else {
            Tick::Sample(value)
        }
    }

    /// Evaluate the interpolation formula at an elapsed time.
    ///
    /// Relative-negative runs `0 → −magnitude`; relative-positive and
    /// absolute run the inverted form `−magnitude → 0`, which is how
    /// two phases produce mirrored motion from one magnitude.
    pub fn sample_at(&self, elapsed_ms: TimestampMs) -> f64 {
        let t = elapsed_ms as f64 / self.spec.duration_ms as f64;
        let eased = self.spec.easing.evaluate(t);
        let magnitude = self.spec.delta.magnitude();

        match &self.spec.delta {
            StyleDelta::Relative {
                sign: Sign::Negative,
                ..
            } => eased * -magnitude,
            StyleDelta::Relative {
                sign: Sign::Positive,
                ..
            }
            | StyleDelta::Absolute { .. } => {
                (self.spec.easing.evaluate(self.start_correction) - eased) * -magnitude
            }
        }
    }
}

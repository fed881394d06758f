//! The effect state machine.
//!
//! Deterministic and timestamp-driven: key arrivals and clock ticks
//! come in as millisecond timestamps on one timeline, and every state
//! transition happens inside `handle_key` or `advance`. Nothing here
//! reads the system clock or sleeps.

use toasty_common::config::EffectConfig;
use toasty_common::error::ToastyResult;
use toasty_effect_model::easing::Easing;
use toasty_effect_model::event::{KeyEvent, TimestampMs};
use toasty_effect_model::sequence::SequenceSpec;
use toasty_effect_model::value::{StyleDelta, StyleValue};
use toasty_input_matcher::{MatchOutcome, SequenceMatcher};
use toasty_tween_engine::{resolve_easing, ActiveTweens, Tick, TweenHandle, TweenSpec, Tweener};

use crate::asset::ImageAsset;
use crate::audio::AudioSink;
use crate::surface::Surface;

/// The style property the effect animates.
const SLIDE_PROPERTY: &str = "right";

/// Animation phase of the effect cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SlidingIn,
    Holding,
    SlidingOut,
}

/// A tween in flight, with its next scheduled tick time.
struct ActiveTween {
    tweener: Tweener,
    handle: TweenHandle,
    next_due: TimestampMs,
}

/// Watches the key stream and runs the slide-in/hold/slide-out cycle
/// against the host surface.
pub struct EffectEngine<S: Surface, A: AudioSink> {
    config: EffectConfig,
    easing: Easing,
    surface: S,
    audio: A,
    asset: ImageAsset,
    matcher: SequenceMatcher,
    registry: ActiveTweens,
    phase: Phase,
    active: Option<ActiveTween>,
    hold_until: Option<TimestampMs>,
}

impl<S: Surface, A: AudioSink> EffectEngine<S, A> {
    pub fn new(config: EffectConfig, surface: S, audio: A, asset: ImageAsset) -> Self {
        let easing = resolve_easing(&config.easing);
        let matcher = SequenceMatcher::new(SequenceSpec::new(config.key_codes.clone()));
        Self {
            config,
            easing,
            surface,
            audio,
            asset,
            matcher,
            registry: ActiveTweens::new(),
            phase: Phase::Idle,
            active: None,
            hold_until: None,
        }
    }

    /// Feed one key event into the matcher.
    ///
    /// Only releases are observed, mirroring a key-up listener; a
    /// completed sequence triggers the effect at `now`.
    pub fn handle_key(&mut self, event: &KeyEvent, now: TimestampMs) -> ToastyResult<()> {
        if !event.is_release() {
            return Ok(());
        }
        if self.matcher.observe(event.code, now) == MatchOutcome::Completed {
            self.trigger(now)?;
        }
        Ok(())
    }

    /// Begin an effect cycle at `now`.
    ///
    /// A no-op while the image has not loaded or while the effect is
    /// already visible, so overlapping triggers collapse into one
    /// cycle. Returns whether a cycle was started.
    pub fn trigger(&mut self, now: TimestampMs) -> ToastyResult<bool> {
        if !self.asset.is_loaded() {
            tracing::debug!("trigger ignored: image asset not loaded");
            return Ok(false);
        }
        if self.phase != Phase::Idle || self.surface.is_attached() {
            tracing::debug!(phase = ?self.phase, "trigger ignored: effect already visible");
            return Ok(false);
        }

        let size = self.asset.display_size() as f64;

        // Position fully off-surface before attaching.
        self.surface
            .set_style(SLIDE_PROPERTY, &StyleValue::px(-size))?;
        self.surface.attach()?;

        if self.config.sound {
            let volume = self.config.clamped_volume();
            if let Err(e) = self.audio.play(volume) {
                tracing::warn!(error = %e, "sound playback failed, continuing");
            }
        }

        if let Err(e) = self.start_tween(
            StyleDelta::relative_positive_px(size),
            self.config.slide_in_ms,
            now,
        ) {
            self.surface.detach().ok();
            return Err(e);
        }
        self.phase = Phase::SlidingIn;
        tracing::info!(size, duration_ms = self.config.slide_in_ms, "effect triggered");
        Ok(true)
    }

    /// Replace the trigger sequence, discarding partial match progress.
    pub fn bind_keys(&mut self, codes: Vec<u32>) {
        tracing::info!(len = codes.len(), "trigger sequence rebound");
        self.matcher.rebind(SequenceSpec::new(codes));
    }

    /// Drive timeouts, tween ticks, and the hold deadline up to `now`.
    pub fn advance(&mut self, now: TimestampMs) -> ToastyResult<()> {
        self.matcher.poll_timeout(now);

        if self.phase != Phase::Idle && !self.surface.is_attached() {
            tracing::warn!(phase = ?self.phase, "surface detached externally, aborting cycle");
            self.abort_cycle();
            return Ok(());
        }

        match self.phase {
            Phase::Idle => {}
            Phase::SlidingIn | Phase::SlidingOut => self.drive_tween(now)?,
            Phase::Holding => {
                if self.hold_until.is_some_and(|until| now >= until) {
                    self.hold_until = None;
                    let size = self.asset.display_size() as f64;
                    if let Err(e) = self.start_tween(
                        StyleDelta::relative_negative_px(size),
                        self.config.slide_out_ms,
                        now,
                    ) {
                        self.abort_cycle();
                        return Err(e);
                    }
                    self.phase = Phase::SlidingOut;
                    tracing::debug!(duration_ms = self.config.slide_out_ms, "sliding out");
                }
            }
        }
        Ok(())
    }

    /// Handle for cancelling the tween currently in flight.
    pub fn active_handle(&self) -> Option<TweenHandle> {
        self.active.as_ref().map(|active| active.handle.clone())
    }

    /// Current animation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the effect is currently visible.
    pub fn is_visible(&self) -> bool {
        self.surface.is_attached()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn asset_mut(&mut self) -> &mut ImageAsset {
        &mut self.asset
    }

    pub fn matcher(&self) -> &SequenceMatcher {
        &self.matcher
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Start a tween phase, claiming the property and writing the
    /// immediate sample.
    fn start_tween(
        &mut self,
        delta: StyleDelta,
        duration_ms: u64,
        now: TimestampMs,
    ) -> ToastyResult<()> {
        let spec = TweenSpec::new(SLIDE_PROPERTY, delta)
            .with_duration(duration_ms)
            .with_easing(self.easing);
        let mut tweener = Tweener::new(spec)?;
        self.registry.claim(self.surface.id(), SLIDE_PROPERTY)?;
        let handle = tweener.handle();
        let step_ms = tweener.step_ms();

        // Duration is validated positive, so the immediate sample at
        // elapsed zero cannot also be the final one.
        if let Tick::Sample(value) = tweener.tick() {
            let unit = tweener.unit().to_string();
            if let Err(e) = self
                .surface
                .set_style(SLIDE_PROPERTY, &StyleValue::new(value, unit))
            {
                self.registry.release(self.surface.id(), SLIDE_PROPERTY);
                return Err(e);
            }
        }

        self.active = Some(ActiveTween {
            tweener,
            handle,
            next_due: now + step_ms,
        });
        Ok(())
    }

    /// Deliver every tween tick that has come due.
    fn drive_tween(&mut self, now: TimestampMs) -> ToastyResult<()> {
        while let Some((tick, unit)) = self.next_due_tick(now) {
            match tick {
                Tick::Sample(value) => {
                    self.surface
                        .set_style(SLIDE_PROPERTY, &StyleValue::new(value, unit))?;
                }
                Tick::Finished(value) => {
                    self.surface
                        .set_style(SLIDE_PROPERTY, &StyleValue::new(value, unit))?;
                    self.release_active();
                    self.finish_phase(now)?;
                }
                Tick::Cancelled => {
                    tracing::debug!(phase = ?self.phase, "tween cancelled, aborting cycle");
                    self.abort_cycle();
                }
                Tick::Exhausted => {
                    self.release_active();
                }
            }
        }
        Ok(())
    }

    /// Pop the next due tick, advancing the schedule by one step.
    fn next_due_tick(&mut self, now: TimestampMs) -> Option<(Tick, String)> {
        let active = self.active.as_mut()?;
        if now < active.next_due {
            return None;
        }
        active.next_due += active.tweener.step_ms();
        let unit = active.tweener.unit().to_string();
        Some((active.tweener.tick(), unit))
    }

    /// Transition out of a completed tween phase.
    fn finish_phase(&mut self, now: TimestampMs) -> ToastyResult<()> {
        match self.phase {
            Phase::SlidingIn => {
                self.phase = Phase::Holding;
                self.hold_until = Some(now + self.config.hold_ms);
                tracing::debug!(hold_ms = self.config.hold_ms, "holding");
            }
            Phase::SlidingOut => {
                self.surface.detach()?;
                self.phase = Phase::Idle;
                tracing::info!("effect cycle complete");
            }
            Phase::Idle | Phase::Holding => {}
        }
        Ok(())
    }

    /// Release the active tween's property claim.
    fn release_active(&mut self) {
        if self.active.take().is_some() {
            self.registry.release(self.surface.id(), SLIDE_PROPERTY);
        }
    }

    /// Tear the cycle down to idle: cancel any in-flight tween,
    /// release the claim, and detach if still attached.
    fn abort_cycle(&mut self) {
        if let Some(active) = &self.active {
            active.handle.cancel();
        }
        self.release_active();
        self.hold_until = None;
        self.phase = Phase::Idle;
        if self.surface.is_attached() {
            if let Err(e) = self.surface.detach() {
                tracing::warn!(error = %e, "detach failed during abort");
            }
        }
    }
}

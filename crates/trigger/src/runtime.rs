//! The cooperative runtime loop.
//!
//! Wraps an [`EffectEngine`] in a single-threaded polling loop: drain
//! the key source, advance the engine, yield. All engine timestamps
//! come from one monotonic timeline started when the loop starts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use toasty_common::clock::EffectClock;
use toasty_common::error::ToastyResult;
use toasty_input_matcher::{KeyBinding, KeySource};

use crate::audio::AudioSink;
use crate::engine::EffectEngine;
use crate::surface::Surface;

/// Runs the effect engine against a key source until stopped.
pub struct EffectRuntime<S: Surface, A: AudioSink> {
    engine: EffectEngine<S, A>,
    binding: Option<KeyBinding>,
    clock: EffectClock,
    stop_flag: Arc<AtomicBool>,
    keys_observed: u64,
}

impl<S: Surface, A: AudioSink> EffectRuntime<S, A> {
    /// Create a runtime around an engine.
    pub fn new(engine: EffectEngine<S, A>) -> Self {
        Self {
            engine,
            binding: None,
            clock: EffectClock::start(),
            stop_flag: Arc::new(AtomicBool::new(false)),
            keys_observed: 0,
        }
    }

    /// Subscribe to a key source. Replaces any existing subscription.
    ///
    /// With an empty trigger sequence the source is not attached —
    /// nothing would ever be observed.
    pub fn attach_source(&mut self, source: Box<dyn KeySource>) {
        if self.engine.matcher().is_disabled() {
            tracing::debug!(
                source = source.name(),
                "trigger sequence is empty, source not attached"
            );
            return;
        }
        self.binding = Some(KeyBinding::new(source));
    }

    /// Replace the active trigger sequence.
    ///
    /// An empty sequence releases the key subscription; re-enabling
    /// requires attaching a source again.
    pub fn bind_keys(&mut self, codes: Vec<u32>) {
        let disable = codes.is_empty();
        self.engine.bind_keys(codes);
        if disable {
            self.binding = None;
        }
    }

    pub fn engine(&self) -> &EffectEngine<S, A> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EffectEngine<S, A> {
        &mut self.engine
    }

    /// Whether a key subscription is currently held.
    pub fn is_listening(&self) -> bool {
        self.binding.is_some()
    }

    /// Number of key events observed so far.
    pub fn keys_observed(&self) -> u64 {
        self.keys_observed
    }

    /// Set the stop flag.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Get the stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Run the polling loop until the stop flag is set.
    pub async fn run(&mut self) -> ToastyResult<()> {
        let started = tokio::time::Instant::now();
        tracing::info!(epoch = %self.clock.epoch_wall(), "effect runtime started");

        while !self.stop_flag.load(Ordering::Relaxed) {
            let now = started.elapsed().as_millis() as u64;

            if let Some(binding) = self.binding.as_mut() {
                match binding.poll() {
                    Ok(Some(event)) => {
                        self.keys_observed += 1;
                        if let Err(e) = self.engine.handle_key(&event, now) {
                            tracing::warn!(error = %e, "key handling error");
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "key source error");
                    }
                }
            }
            if self.binding.as_ref().is_some_and(|b| !b.is_available()) {
                tracing::warn!("key source exhausted, releasing subscription");
                self.binding = None;
            }

            if let Err(e) = self.engine.advance(now) {
                tracing::warn!(error = %e, "effect advance error");
            }

            tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        }

        tracing::info!(keys = self.keys_observed, "effect runtime stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ImageAsset;
    use crate::audio::RecordingAudio;
    use crate::engine::Phase;
    use crate::surface::RecordingSurface;
    use toasty_common::config::EffectConfig;
    use toasty_effect_model::event::KeyEvent;
    use toasty_effect_model::sequence::KONAMI_CODE;
    use toasty_input_matcher::StubSource;

    fn konami_events() -> Vec<KeyEvent> {
        KONAMI_CODE
            .iter()
            .enumerate()
            .map(|(i, &code)| KeyEvent::up(i as u64, code))
            .collect()
    }

    fn test_runtime() -> EffectRuntime<RecordingSurface, RecordingAudio> {
        let engine = EffectEngine::new(
            EffectConfig::default(),
            RecordingSurface::new(1),
            RecordingAudio::new(),
            ImageAsset::loaded(150, 150),
        );
        EffectRuntime::new(engine)
    }

    #[tokio::test(start_paused = true)]
    async fn test_runtime_runs_one_full_cycle() {
        let mut runtime = test_runtime();
        runtime.attach_source(Box::new(StubSource::new(konami_events())));
        assert!(runtime.is_listening());

        // Stop well after the cycle (10 polls + 360 + 600 + 360 + slack).
        let stop = runtime.stop_flag();
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(2_000)).await;
            stop.store(true, Ordering::SeqCst);
        });
        runtime.run().await.unwrap();

        assert_eq!(runtime.keys_observed(), 10);
        assert_eq!(runtime.engine().phase(), Phase::Idle);

        let surface = runtime.engine().surface();
        assert_eq!(surface.attach_count(), 1);
        assert_eq!(surface.detach_count(), 1);
        assert_eq!(runtime.engine().audio().play_count(), 1);

        // The animation settled back off-surface.
        let last = surface.last_write().unwrap();
        assert!((last.1.position + 150.0).abs() < 0.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runtime_without_source_stays_idle() {
        let mut runtime = test_runtime();
        let stop = runtime.stop_flag();
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
            stop.store(true, Ordering::SeqCst);
        });
        runtime.run().await.unwrap();

        assert_eq!(runtime.keys_observed(), 0);
        assert_eq!(runtime.engine().phase(), Phase::Idle);
        assert!(!runtime.engine().is_visible());
    }

    #[test]
    fn test_bind_keys_empty_releases_subscription() {
        let mut runtime = test_runtime();
        runtime.attach_source(Box::new(StubSource::empty()));
        assert!(runtime.is_listening());

        runtime.bind_keys(Vec::new());
        assert!(!runtime.is_listening());
        assert!(runtime.engine().matcher().is_disabled());
    }

    #[test]
    fn test_attach_source_with_empty_sequence_is_refused() {
        let mut runtime = test_runtime();
        runtime.bind_keys(Vec::new());
        runtime.attach_source(Box::new(StubSource::empty()));
        assert!(!runtime.is_listening());
    }
}

//! Clock and timing utilities for the effect timeline.
//!
//! Everything in Toasty is driven by discrete timestamps on a single
//! millisecond timeline anchored to a monotonic epoch: key arrivals,
//! sequence timeouts, tween ticks, and hold deadlines. Pure code never
//! reads the system clock — timestamps are inputs.

use std::time::Instant;

/// An effect clock that provides monotonic millisecond timestamps
/// relative to a fixed epoch (the moment the runtime started).
#[derive(Debug, Clone)]
pub struct EffectClock {
    /// The instant the timeline started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl EffectClock {
    /// Create a new effect clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a clock from a known epoch.
    pub fn from_epoch(epoch: Instant, wall: String) -> Self {
        Self {
            epoch,
            epoch_wall: wall,
        }
    }

    /// Milliseconds elapsed since the timeline started.
    pub fn elapsed_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Seconds elapsed since the timeline started.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at timeline start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Convert an elapsed millisecond value to seconds.
    pub fn ms_to_secs(ms: u64) -> f64 {
        ms as f64 / 1_000.0
    }

    /// Convert seconds to milliseconds.
    pub fn secs_to_ms(secs: f64) -> u64 {
        (secs * 1_000.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_elapsed() {
        let clock = EffectClock::start();
        // Should be very small but non-negative
        assert!(clock.elapsed_ms() < 1_000);
    }

    #[test]
    fn test_ms_to_secs_conversion() {
        assert!((EffectClock::ms_to_secs(1_500) - 1.5).abs() < 1e-9);
        assert_eq!(EffectClock::secs_to_ms(2.0), 2_000);
    }

    #[test]
    fn test_epoch_wall_preserved() {
        let clock = EffectClock::from_epoch(Instant::now(), "2026-01-01T00:00:00Z".to_string());
        assert_eq!(clock.epoch_wall(), "2026-01-01T00:00:00Z");
    }
}

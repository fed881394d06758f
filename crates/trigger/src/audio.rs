//! Audio playback abstraction.

use toasty_common::error::ToastyResult;

/// Plays the effect sound. Failures are logged and swallowed by the
/// engine — a missing sound never stops the animation.
pub trait AudioSink {
    /// Play the effect sound at the given volume in [0.0, 1.0].
    fn play(&mut self, volume: f64) -> ToastyResult<()>;
}

/// Discards playback requests (sound disabled or headless host).
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _volume: f64) -> ToastyResult<()> {
        Ok(())
    }
}

/// Records playback requests for tests.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    plays: Vec<f64>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Volumes of every playback request, in order.
    pub fn plays(&self) -> &[f64] {
        &self.plays
    }

    pub fn play_count(&self) -> usize {
        self.plays.len()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, volume: f64) -> ToastyResult<()> {
        self.plays.push(volume);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_audio_counts_plays() {
        let mut audio = RecordingAudio::new();
        audio.play(0.5).unwrap();
        audio.play(1.0).unwrap();
        assert_eq!(audio.play_count(), 2);
        assert_eq!(audio.plays(), &[0.5, 1.0]);
    }

    #[test]
    fn test_null_audio_accepts_anything() {
        let mut audio = NullAudio;
        assert!(audio.play(0.0).is_ok());
        assert!(audio.play(1.0).is_ok());
    }
}

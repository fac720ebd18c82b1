//! Decoded, ready-to-play speech audio.

use std::time::Duration;

/// PCM audio produced by speech synthesis.
///
/// Samples are interleaved `f32` in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechAudio {
    /// Interleaved PCM f32 samples.
    pub samples: Vec<f32>,

    /// Sample rate in Hz (24 000 for the hosted TTS model).
    pub sample_rate: u32,

    /// Channel count (1 = mono).
    pub channels: u16,
}

impl SpeechAudio {
    /// Mono audio at the given sample rate.
    #[must_use]
    pub const fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            channels: 1,
        }
    }

    /// Whether there is nothing to play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() || self.sample_rate == 0 || self.channels == 0
    }

    /// Playback length of the audio.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration(&self) -> Duration {
        if self.is_empty() {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as f64 / f64::from(self.channels);
        Duration::from_secs_f64(frames / f64::from(self.sample_rate))
    }
}

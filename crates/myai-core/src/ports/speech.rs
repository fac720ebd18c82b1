//! Speech synthesis port.
//!
//! The playback controller in `myai-voice` drives a `SpeechSynthesizer`; the
//! Gemini adapter in `myai-gemini` implements it. Transport and payload
//! encoding stay behind this boundary: callers only ever see decoded
//! [`SpeechAudio`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{SpeechAudio, Voice};

// ── Error ─────────────────────────────────────────────────────────────────────

/// Why a synthesis request produced no playable audio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// Network or API failure.
    #[error("Speech request failed: {0}")]
    Request(String),

    /// The provider answered without an audio payload.
    #[error("No audio data received from API")]
    EmptyAudio,

    /// The audio payload could not be decoded into samples.
    #[error("Failed to decode audio: {0}")]
    Decode(String),

    /// No response within the configured window.
    #[error("Speech request timed out after {0:?}")]
    TimedOut(Duration),
}

// ── Port trait ────────────────────────────────────────────────────────────────

/// Text + voice in, decoded audio out.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the given prebuilt voice.
    ///
    /// Implementations must not retry internally.
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<SpeechAudio, SynthesisError>;
}

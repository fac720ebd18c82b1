//! Audio output abstraction.
//!
//! The controller only needs "play this once and tell me when you are done".
//! [`AudioThreadHandle`](crate::AudioThreadHandle) implements it on the local
//! output device; tests plug in recording fakes.

use std::sync::Arc;

use myai_core::SpeechAudio;

use crate::error::VoiceError;

/// Callback invoked when playback of one clip ends, naturally or not.
pub type PlaybackDoneCallback = Box<dyn FnOnce() + Send + 'static>;

/// Creates the output on first use. Called at most once per successful acquire.
pub type OutputFactory = Box<dyn Fn() -> Result<Arc<dyn AudioOutput>, VoiceError> + Send + Sync>;

/// A sink that plays decoded audio.
///
/// Implementations must invoke `on_done` exactly once for every call that
/// returns `Ok`, and never for a call that returns `Err`. There is no pause,
/// resume or cancel.
pub trait AudioOutput: Send + Sync {
    /// Start playing `audio` and return without waiting for it to finish.
    fn play(&self, audio: SpeechAudio, on_done: PlaybackDoneCallback) -> Result<(), VoiceError>;
}

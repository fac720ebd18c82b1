//! Speech playback for myai.
//!
//! [`PlaybackController`] turns an utterance into audio through a
//! [`SpeechSynthesizer`](myai_core::SpeechSynthesizer) and plays it on an
//! [`AudioOutput`], exposing the lifecycle as an explicit
//! [`PlaybackState`] plus a stream of [`PlaybackEvent`]s.
#![deny(unused_crate_dependencies)]

pub mod audio_thread;
pub mod controller;
pub mod error;
pub mod output;
pub mod playback;
pub mod state;

// Re-export key types for convenience
pub use audio_thread::AudioThreadHandle;
pub use controller::{
    DEFAULT_COMPLETION_GRACE, DEFAULT_SYNTHESIS_TIMEOUT, PlaybackConfig, PlaybackController,
};
pub use error::{SPEECH_FAILED_MESSAGE, VoiceError};
pub use output::{AudioOutput, OutputFactory, PlaybackDoneCallback};
pub use state::{PlaybackEvent, PlaybackState};

// Used by the integration tests only
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;

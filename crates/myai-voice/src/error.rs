//! Speech playback error types.

use myai_core::SynthesisError;

use crate::state::PlaybackState;

/// The only failure text shown to users of the speech screen.
pub const SPEECH_FAILED_MESSAGE: &str = "Failed to generate speech. Please try again.";

/// Errors that can occur while speaking an utterance.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    /// The submitted text trims to empty.
    #[error("Text to speak must not be empty")]
    InvalidInput,

    /// An utterance is already generating or playing.
    #[error("Speech is busy ({0})")]
    Busy(PlaybackState),

    /// The synthesis collaborator failed, timed out or returned no audio.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// Failed to open the audio output stream or start playback.
    #[error("Failed to open audio output stream: {0}")]
    OutputStreamError(String),

    /// The dedicated audio thread is gone.
    #[error("Audio thread is no longer running")]
    AudioThreadDied,
}

impl VoiceError {
    /// Text to show the user, if this error is meant to be surfaced.
    ///
    /// `InvalidInput` and `Busy` are prevented by the UI (the speak control is
    /// disabled) and have no user-facing message.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput | Self::Busy(_) => None,
            Self::Synthesis(_) | Self::OutputStreamError(_) | Self::AudioThreadDied => {
                Some(SPEECH_FAILED_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_errors_are_not_surfaced() {
        assert_eq!(VoiceError::InvalidInput.user_message(), None);
        assert_eq!(
            VoiceError::Busy(PlaybackState::Playing).user_message(),
            None
        );
    }

    #[test]
    fn synthesis_failures_share_one_message() {
        let err = VoiceError::from(SynthesisError::EmptyAudio);
        assert_eq!(err.user_message(), Some(SPEECH_FAILED_MESSAGE));
        assert_eq!(err.to_string(), "No audio data received from API");
    }

    #[test]
    fn busy_names_the_blocking_state() {
        let err = VoiceError::Busy(PlaybackState::Generating);
        assert_eq!(err.to_string(), "Speech is busy (Generating)");
    }
}

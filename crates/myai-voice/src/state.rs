//! Playback states and the events emitted when they change.

use std::fmt;
use std::time::Duration;

// ── State ──────────────────────────────────────────────────────────

/// Lifecycle of one utterance.
///
/// ```text
/// Idle ──submit──▶ Generating ──audio──▶ Playing ──done──▶ Idle
///   ▲                  │
///   │                  └──error──▶ Failed ──submit──▶ Generating
///   └──────acknowledge───────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing in flight.
    #[default]
    Idle,

    /// Waiting on the synthesis collaborator.
    Generating,

    /// Audio handed to the output, waiting for its completion signal.
    Playing,

    /// The last utterance failed; a new one may be submitted.
    Failed,
}

impl PlaybackState {
    /// Whether a new utterance may be submitted from this state.
    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }

    /// Whether an utterance is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Generating | Self::Playing)
    }

    /// Status text for the speak control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Generate & Play",
            Self::Generating => "Generating Audio...",
            Self::Playing => "Playing...",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::Generating => "Generating",
            Self::Playing => "Playing",
            Self::Failed => "Failed",
        };
        f.write_str(name)
    }
}

// ── Events ─────────────────────────────────────────────────────────

/// Events emitted by the playback controller for UI consumption.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// Controller state changed.
    StateChanged(PlaybackState),

    /// Audio was handed to the output device.
    PlaybackStarted {
        /// Length of the audio being played.
        duration: Duration,
    },

    /// The output signalled completion (or the watchdog gave up waiting).
    PlaybackFinished,

    /// A user-facing failure message.
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_and_failed_accept_submit() {
        assert!(PlaybackState::Idle.accepts_submit());
        assert!(PlaybackState::Failed.accepts_submit());
        assert!(!PlaybackState::Generating.accepts_submit());
        assert!(!PlaybackState::Playing.accepts_submit());
    }

    #[test]
    fn busy_is_the_complement_of_accepts_submit() {
        for state in [
            PlaybackState::Idle,
            PlaybackState::Generating,
            PlaybackState::Playing,
            PlaybackState::Failed,
        ] {
            assert_eq!(state.is_busy(), !state.accepts_submit(), "{state}");
        }
    }

    #[test]
    fn labels_follow_the_speak_control() {
        assert_eq!(PlaybackState::Idle.label(), "Generate & Play");
        assert_eq!(PlaybackState::Generating.label(), "Generating Audio...");
        assert_eq!(PlaybackState::Playing.label(), "Playing...");
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(PlaybackState::default(), PlaybackState::Idle);
    }
}

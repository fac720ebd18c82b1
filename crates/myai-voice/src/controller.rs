//! Playback lifecycle controller.
//!
//! Owns the speech state machine for one utterance at a time:
//!
//! 1. `submit` validates the text and the current state, moves to
//!    `Generating` and awaits the synthesizer (bounded by
//!    [`PlaybackConfig::synthesis_timeout`]).
//! 2. Non-empty audio moves to `Playing` and is handed to the lazily acquired
//!    [`AudioOutput`]; `submit` returns without waiting for playback.
//! 3. The output's completion callback (or the watchdog, after
//!    `duration + completion_grace`) moves back to `Idle`.
//!
//! Any failure lands in `Failed` with [`SPEECH_FAILED_MESSAGE`], including a
//! `submit` future dropped before its audio was ready; nothing is retried.
//! Completion signals carry the sequence number of the utterance they belong
//! to, so a late signal can never end a newer utterance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use myai_core::{Settings, SpeechSynthesizer, SynthesisError, Utterance, Voice};
use tokio::sync::mpsc;

use crate::audio_thread::AudioThreadHandle;
use crate::error::{SPEECH_FAILED_MESSAGE, VoiceError};
use crate::output::{AudioOutput, OutputFactory};
use crate::state::{PlaybackEvent, PlaybackState};

// ── Configuration ──────────────────────────────────────────────────

/// Default bound on one synthesis call.
pub const DEFAULT_SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Default slack after the audio's duration before forcing `Idle`.
pub const DEFAULT_COMPLETION_GRACE: Duration = Duration::from_secs(5);

/// Timing knobs for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Maximum time to wait for the synthesizer.
    pub synthesis_timeout: Duration,

    /// Extra time after the clip's duration to wait for the completion
    /// signal. `None` waits forever.
    pub completion_grace: Option<Duration>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            synthesis_timeout: DEFAULT_SYNTHESIS_TIMEOUT,
            completion_grace: Some(DEFAULT_COMPLETION_GRACE),
        }
    }
}

impl PlaybackConfig {
    /// Build from application settings. A grace of `0` ms disables the watchdog.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            synthesis_timeout: Duration::from_secs(settings.request_timeout_secs),
            completion_grace: (settings.playback_grace_ms > 0)
                .then(|| Duration::from_millis(settings.playback_grace_ms)),
        }
    }
}

// ── Shared state ───────────────────────────────────────────────────

/// The only mutable state: current phase plus the id of the latest utterance.
#[derive(Debug, Default)]
struct Phase {
    state: PlaybackState,
    seq: u64,
}

/// State shared with completion callbacks and the watchdog task.
#[derive(Clone)]
struct Shared {
    phase: Arc<Mutex<Phase>>,
    events: mpsc::UnboundedSender<PlaybackEvent>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emit an event (best-effort: a dropped receiver is logged and ignored).
    fn emit(&self, event: PlaybackEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("Playback event receiver dropped");
        }
    }

    fn set_state(&self, phase: &mut Phase, new_state: PlaybackState) {
        if phase.state != new_state {
            tracing::debug!(old = ?phase.state, new = ?new_state, seq = phase.seq, "Playback state transition");
            phase.state = new_state;
            self.emit(PlaybackEvent::StateChanged(new_state));
        }
    }

    /// Move utterance `seq` from `from` to `to`. Returns `false` (and changes
    /// nothing) if a different utterance is current or the state moved on.
    fn transition(&self, seq: u64, from: PlaybackState, to: PlaybackState) -> bool {
        let mut phase = self.lock();
        if phase.seq != seq || phase.state != from {
            return false;
        }
        self.set_state(&mut phase, to);
        true
    }

    /// Record a failure of utterance `seq`.
    fn fail(&self, seq: u64, err: &VoiceError) {
        let mut phase = self.lock();
        if phase.seq != seq || !phase.state.is_busy() {
            return;
        }
        tracing::warn!(seq, error = %err, "Speech failed");
        self.enter_failed(&mut phase);
    }

    /// Fail utterance `seq` if it never got past `Generating`.
    fn abandon(&self, seq: u64) {
        let mut phase = self.lock();
        if phase.seq != seq || phase.state != PlaybackState::Generating {
            return;
        }
        tracing::warn!(seq, "Speech request dropped before audio was ready");
        self.enter_failed(&mut phase);
    }

    fn enter_failed(&self, phase: &mut Phase) {
        self.set_state(phase, PlaybackState::Failed);
        self.emit(PlaybackEvent::Error(SPEECH_FAILED_MESSAGE.to_string()));
    }

    /// Handle the end of playback for utterance `seq`.
    fn finish(&self, seq: u64, forced: bool) {
        let mut phase = self.lock();
        if phase.seq != seq || phase.state != PlaybackState::Playing {
            tracing::trace!(seq, current = phase.seq, "Ignoring stale completion signal");
            return;
        }
        if forced {
            tracing::warn!(seq, "No completion signal from audio output; forcing idle");
        }
        self.emit(PlaybackEvent::PlaybackFinished);
        self.set_state(&mut phase, PlaybackState::Idle);
    }
}

/// Held by `submit` for one utterance. If the `submit` future is dropped
/// mid-synthesis the utterance fails instead of staying `Generating`.
struct InFlight {
    shared: Shared,
    seq: u64,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.shared.abandon(self.seq);
    }
}

// ── Controller ─────────────────────────────────────────────────────

/// Drives one utterance at a time through synthesis and playback.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct PlaybackController {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    output_factory: OutputFactory,
    /// Acquired on first use, released when the controller is dropped.
    output: Mutex<Option<Arc<dyn AudioOutput>>>,
    shared: Shared,
    config: PlaybackConfig,
}

impl PlaybackController {
    /// Create a controller and the receiver for its events.
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        output_factory: OutputFactory,
        config: PlaybackConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let (events, event_rx) = mpsc::unbounded_channel();
        let controller = Self {
            synthesizer,
            output_factory,
            output: Mutex::new(None),
            shared: Shared {
                phase: Arc::new(Mutex::new(Phase::default())),
                events,
            },
            config,
        };
        (controller, event_rx)
    }

    /// Create a controller that plays on the default local output device.
    pub fn with_local_output(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        config: PlaybackConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let factory: OutputFactory = Box::new(|| {
            let handle = AudioThreadHandle::spawn()?;
            Ok(Arc::new(handle) as Arc<dyn AudioOutput>)
        });
        Self::new(synthesizer, factory, config)
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.shared.lock().state
    }

    /// Whether the audio output has been acquired yet.
    pub fn is_output_acquired(&self) -> bool {
        self.output_slot().is_some()
    }

    /// Speak `text` with `voice`.
    ///
    /// Returns once playback has started (or the utterance failed). Fails
    /// with [`VoiceError::InvalidInput`] for blank text and
    /// [`VoiceError::Busy`] while another utterance is generating or playing;
    /// both leave the state unchanged.
    pub async fn submit(&self, text: &str, voice: Voice) -> Result<(), VoiceError> {
        let utterance = Utterance::new(text, voice).map_err(|_| VoiceError::InvalidInput)?;
        let seq = self.begin()?;
        let _in_flight = InFlight {
            shared: self.shared.clone(),
            seq,
        };

        tracing::info!(
            seq,
            voice = %utterance.voice(),
            chars = utterance.char_count(),
            "Generating speech"
        );

        match self.run(seq, &utterance).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.shared.fail(seq, &err);
                Err(err)
            }
        }
    }

    /// Clear a `Failed` state back to `Idle`. Returns whether anything changed.
    pub fn acknowledge(&self) -> bool {
        let mut phase = self.shared.lock();
        if phase.state != PlaybackState::Failed {
            return false;
        }
        self.shared.set_state(&mut phase, PlaybackState::Idle);
        true
    }

    /// Guarded `Idle | Failed → Generating`. Returns the new utterance's id.
    fn begin(&self) -> Result<u64, VoiceError> {
        let mut phase = self.shared.lock();
        if !phase.state.accepts_submit() {
            tracing::debug!(state = ?phase.state, "Rejecting submit while busy");
            return Err(VoiceError::Busy(phase.state));
        }
        phase.seq += 1;
        let seq = phase.seq;
        self.shared.set_state(&mut phase, PlaybackState::Generating);
        Ok(seq)
    }

    async fn run(&self, seq: u64, utterance: &Utterance) -> Result<(), VoiceError> {
        let output = self.acquire_output()?;

        let timeout = self.config.synthesis_timeout;
        let audio = tokio::time::timeout(
            timeout,
            self.synthesizer
                .synthesize(utterance.text(), utterance.voice()),
        )
        .await
        .map_err(|_| SynthesisError::TimedOut(timeout))??;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio.into());
        }

        let duration = audio.duration();
        // Only this utterance's `run` moves it out of `Generating`.
        let started = self
            .shared
            .transition(seq, PlaybackState::Generating, PlaybackState::Playing);
        debug_assert!(started, "utterance {seq} left Generating during synthesis");
        if !started {
            tracing::warn!(seq, "Utterance no longer current; not playing");
            return Ok(());
        }
        self.shared
            .emit(PlaybackEvent::PlaybackStarted { duration });

        let on_done = {
            let shared = self.shared.clone();
            Box::new(move || shared.finish(seq, false))
        };
        output.play(audio, on_done)?;
        tracing::info!(seq, ?duration, "Playing speech");

        if let Some(grace) = self.config.completion_grace {
            let shared = self.shared.clone();
            tokio::spawn(async move {
                tokio::time::sleep(duration + grace).await;
                shared.finish(seq, true);
            });
        }

        Ok(())
    }

    /// Return the audio output, creating it on first use.
    fn acquire_output(&self) -> Result<Arc<dyn AudioOutput>, VoiceError> {
        let mut slot = self.output_slot();
        if let Some(output) = slot.as_ref() {
            return Ok(Arc::clone(output));
        }
        let output = (self.output_factory)()?;
        tracing::debug!("Audio output acquired");
        *slot = Some(Arc::clone(&output));
        Ok(output)
    }

    fn output_slot(&self) -> MutexGuard<'_, Option<Arc<dyn AudioOutput>>> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if self.output_slot().take().is_some() {
            tracing::debug!("Audio output released");
        }
    }
}

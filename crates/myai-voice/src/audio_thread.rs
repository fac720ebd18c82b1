//! Dedicated audio output thread. Isolates `!Send` audio resources from the
//! async runtime.
//!
//! `rodio::OutputStream` is `!Send` on some platforms. Rather than using
//! `unsafe impl Send/Sync`, we confine it to a single OS thread and
//! communicate via channels. [`AudioThreadHandle`] is the `Send + Sync` proxy
//! the controller holds.

use std::sync::mpsc;
use std::thread;

use myai_core::SpeechAudio;

use crate::error::VoiceError;
use crate::output::{AudioOutput, PlaybackDoneCallback};
use crate::playback::AudioPlayback;

// ── Commands ───────────────────────────────────────────────────────

/// A command sent from the controller to the audio thread.
enum AudioCommand {
    /// Play a clip and fire `on_done` when it ends.
    Play {
        audio: SpeechAudio,
        on_done: PlaybackDoneCallback,
        reply: mpsc::Sender<Result<(), VoiceError>>,
    },

    /// Shut down the audio thread, releasing the output device.
    Shutdown,
}

// ── Handle (Send + Sync proxy) ─────────────────────────────────────

/// `Send + Sync` handle to the dedicated audio output thread.
///
/// `play` blocks the caller until the audio thread responds;
/// this is microseconds of local channel I/O plus opening a sink.
pub struct AudioThreadHandle {
    cmd_tx: mpsc::Sender<AudioCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AudioThreadHandle {
    /// Spawn the audio thread, open the default output device, and return
    /// the handle.
    ///
    /// Errors from `AudioPlayback::new` are propagated back via a one-shot
    /// init channel.
    pub fn spawn() -> Result<Self, VoiceError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AudioCommand>();
        let (init_tx, init_rx) = mpsc::channel::<Result<(), VoiceError>>();

        let thread = thread::Builder::new()
            .name("myai-audio".into())
            .spawn(move || Self::run(&cmd_rx, &init_tx))
            .map_err(|e| {
                VoiceError::OutputStreamError(format!("failed to spawn audio thread: {e}"))
            })?;

        init_rx.recv().map_err(|_| VoiceError::AudioThreadDied)??;

        Ok(Self {
            cmd_tx,
            thread: Some(thread),
        })
    }

    // ── Internal helpers ───────────────────────────────────────────

    /// Send a command that expects a `Result<T, VoiceError>` reply and block
    /// until the audio thread responds. Channel failures map to
    /// [`VoiceError::AudioThreadDied`].
    fn send_and_recv<T>(
        &self,
        build: impl FnOnce(mpsc::Sender<Result<T, VoiceError>>) -> AudioCommand,
    ) -> Result<T, VoiceError> {
        let (tx, rx) = mpsc::channel();
        self.cmd_tx
            .send(build(tx))
            .map_err(|_| VoiceError::AudioThreadDied)?;
        rx.recv().map_err(|_| VoiceError::AudioThreadDied)?
    }

    // ── Audio thread event loop ────────────────────────────────────

    /// Body of the audio thread. Owns `AudioPlayback` for its entire lifetime.
    fn run(cmd_rx: &mpsc::Receiver<AudioCommand>, init_tx: &mpsc::Sender<Result<(), VoiceError>>) {
        let mut playback = match AudioPlayback::new() {
            Ok(p) => p,
            Err(e) => {
                let _ = init_tx.send(Err(e));
                return;
            }
        };

        if init_tx.send(Ok(())).is_err() {
            return;
        }

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                AudioCommand::Play {
                    audio,
                    on_done,
                    reply,
                } => {
                    let _ = reply.send(playback.play(audio, on_done));
                }

                AudioCommand::Shutdown => break,
            }
        }

        // `playback` is dropped here, on the audio thread.
        tracing::debug!("Audio thread shutting down");
    }
}

impl AudioOutput for AudioThreadHandle {
    fn play(&self, audio: SpeechAudio, on_done: PlaybackDoneCallback) -> Result<(), VoiceError> {
        self.send_and_recv(|reply| AudioCommand::Play {
            audio,
            on_done,
            reply,
        })
    }
}

impl Drop for AudioThreadHandle {
    fn drop(&mut self) {
        // Best-effort shutdown; the thread may already be dead.
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

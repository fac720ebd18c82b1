//! Audio playback module: speech output via `rodio`.
//!
//! Owns the default output device and plays one clip at a time. Every clip
//! gets a watcher thread that fires its completion callback once the sink
//! drains or is stopped.

use std::sync::Arc;

use myai_core::SpeechAudio;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::error::VoiceError;
use crate::output::PlaybackDoneCallback;

/// Audio playback handle for the default output device.
///
/// `rodio::OutputStream` is `!Send` on some platforms, so this type lives on
/// the audio thread (see [`AudioThreadHandle`](crate::AudioThreadHandle)).
pub struct AudioPlayback {
    /// rodio output stream (must be kept alive).
    _stream: OutputStream,

    /// Handle used to create sinks.
    stream_handle: OutputStreamHandle,

    /// Current playback sink (if any).
    sink: Option<Arc<Sink>>,
}

impl AudioPlayback {
    /// Open the default output device.
    pub fn new() -> Result<Self, VoiceError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| VoiceError::OutputStreamError(e.to_string()))?;

        tracing::info!("Audio playback initialized on default output device");

        Ok(Self {
            _stream: stream,
            stream_handle,
            sink: None,
        })
    }

    /// Play `audio` on a fresh sink and invoke `on_done` when it ends.
    ///
    /// Any clip still playing is stopped first; its own callback still fires.
    pub fn play(
        &mut self,
        audio: SpeechAudio,
        on_done: PlaybackDoneCallback,
    ) -> Result<(), VoiceError> {
        self.stop();

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| VoiceError::OutputStreamError(e.to_string()))?;

        let duration = audio.duration();
        let source =
            rodio::buffer::SamplesBuffer::new(audio.channels, audio.sample_rate, audio.samples);
        sink.append(source);

        let sink = Arc::new(sink);
        self.sink = Some(Arc::clone(&sink));
        tracing::debug!(?duration, sample_rate = audio.sample_rate, "Audio playback started");

        Self::spawn_completion_watcher(sink, on_done);
        Ok(())
    }

    /// Block a background thread until `sink` drains or is stopped, then
    /// fire `on_done`.
    fn spawn_completion_watcher(sink: Arc<Sink>, on_done: PlaybackDoneCallback) {
        // `Sink` is Send in rodio 0.20+. `sleep_until_end()` returns once the
        // queue drains or `stop()` drops the queued sources.
        std::thread::spawn(move || {
            sink.sleep_until_end();
            tracing::debug!("Playback finished");
            on_done();
        });
    }

    /// Stop any active playback immediately.
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            tracing::debug!("Audio playback stopped");
        }
    }
}

impl Drop for AudioPlayback {
    fn drop(&mut self) {
        self.stop();
    }
}

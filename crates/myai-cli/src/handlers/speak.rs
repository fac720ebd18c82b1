//! `myai speak` and the Speech screen.

use myai_core::Voice;
use myai_voice::{PlaybackController, PlaybackEvent, PlaybackState};
use tokio::sync::mpsc;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Speak `text` and wait for playback to finish.
pub async fn execute(ctx: &CliContext, text: &str, voice: Option<Voice>) -> Result<(), CliError> {
    let voice = voice.unwrap_or(ctx.settings.default_voice);
    let (controller, mut events) = ctx.speech();
    speak(&controller, &mut events, text, voice).await
}

/// Submit one utterance, print progress, and return once the controller is
/// back to `Idle` (or has failed).
pub async fn speak(
    controller: &PlaybackController,
    events: &mut mpsc::UnboundedReceiver<PlaybackEvent>,
    text: &str,
    voice: Voice,
) -> Result<(), CliError> {
    println!("{}", PlaybackState::Generating.label());

    if let Err(err) = controller.submit(text, voice).await {
        while events.try_recv().is_ok() {}
        return Err(err.into());
    }

    while let Some(event) = events.recv().await {
        if let Some(line) = progress_line(&event) {
            println!("{line}");
        }
        match event {
            PlaybackEvent::StateChanged(PlaybackState::Idle) => return Ok(()),
            PlaybackEvent::Error(message) => return Err(CliError::Speech(message)),
            _ => {}
        }
    }
    Ok(())
}

/// Terminal text for an event, if it is worth showing.
fn progress_line(event: &PlaybackEvent) -> Option<String> {
    match event {
        PlaybackEvent::PlaybackStarted { duration } => Some(format!(
            "{} ({:.1}s)",
            PlaybackState::Playing.label(),
            duration.as_secs_f32()
        )),
        PlaybackEvent::PlaybackFinished => Some("Done.".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use mockall::mock;
    use myai_core::{SpeechAudio, SpeechSynthesizer, SynthesisError};
    use myai_voice::{
        AudioOutput, OutputFactory, PlaybackConfig, PlaybackDoneCallback, SPEECH_FAILED_MESSAGE,
        VoiceError,
    };
    use tokio_test::assert_ok;

    mock! {
        Synth {}

        #[async_trait]
        impl SpeechSynthesizer for Synth {
            async fn synthesize(&self, text: &str, voice: Voice) -> Result<SpeechAudio, SynthesisError>;
        }
    }

    /// Finishes every clip as soon as it starts.
    struct InstantOutput;

    impl AudioOutput for InstantOutput {
        fn play(&self, _audio: SpeechAudio, on_done: PlaybackDoneCallback) -> Result<(), VoiceError> {
            on_done();
            Ok(())
        }
    }

    fn controller_with(
        synth: MockSynth,
    ) -> (PlaybackController, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let factory: OutputFactory =
            Box::new(|| Ok(Arc::new(InstantOutput) as Arc<dyn AudioOutput>));
        PlaybackController::new(Arc::new(synth), factory, PlaybackConfig::default())
    }

    fn tenth_of_a_second() -> SpeechAudio {
        SpeechAudio::mono(vec![0.0; 2_400], 24_000)
    }

    #[tokio::test]
    async fn test_speak_returns_once_idle() {
        let mut synth = MockSynth::new();
        synth
            .expect_synthesize()
            .withf(|text, voice| text == "Hello world" && *voice == Voice::Fenrir)
            .times(1)
            .returning(|_, _| Ok(tenth_of_a_second()));
        let (controller, mut events) = controller_with(synth);

        assert_ok!(speak(&controller, &mut events, "Hello world", Voice::Fenrir).await);
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_synthesis_failure_is_a_speech_error() {
        let mut synth = MockSynth::new();
        synth
            .expect_synthesize()
            .times(1)
            .returning(|_, _| Err(SynthesisError::Request("HTTP 500".to_string())));
        let (controller, mut events) = controller_with(synth);

        let err = speak(&controller, &mut events, "Hello", Voice::Kore)
            .await
            .unwrap_err();
        assert!(matches!(&err, CliError::Speech(message) if message == SPEECH_FAILED_MESSAGE));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(controller.state(), PlaybackState::Failed);
        // Events of the rejected utterance were consumed.
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_the_synthesizer() {
        let mut synth = MockSynth::new();
        synth.expect_synthesize().never();
        let (controller, mut events) = controller_with(synth);

        let err = speak(&controller, &mut events, "   ", Voice::Kore)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[tokio::test]
    async fn test_error_event_ends_the_wait() {
        let mut synth = MockSynth::new();
        synth
            .expect_synthesize()
            .returning(|_, _| Ok(tenth_of_a_second()));
        let (controller, _controller_events) = controller_with(synth);

        let (tx, mut events) = mpsc::unbounded_channel();
        tx.send(PlaybackEvent::StateChanged(PlaybackState::Playing))
            .unwrap();
        tx.send(PlaybackEvent::Error(SPEECH_FAILED_MESSAGE.to_string()))
            .unwrap();

        let err = speak(&controller, &mut events, "Hello", Voice::Kore)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Speech(message) if message == SPEECH_FAILED_MESSAGE));
    }

    #[test]
    fn test_progress_lines() {
        let started = PlaybackEvent::PlaybackStarted {
            duration: Duration::from_millis(2500),
        };
        assert_eq!(progress_line(&started).as_deref(), Some("Playing... (2.5s)"));
        assert_eq!(
            progress_line(&PlaybackEvent::PlaybackFinished).as_deref(),
            Some("Done.")
        );
        assert_eq!(
            progress_line(&PlaybackEvent::StateChanged(PlaybackState::Generating)),
            None
        );
    }
}

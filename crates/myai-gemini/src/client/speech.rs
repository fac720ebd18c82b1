//! Text-to-speech.

use myai_core::{SpeechAudio, Voice};

use super::GeminiClient;
use crate::audio::decode_inline_audio;
use crate::error::{GeminiError, GeminiResult};
use crate::http::HttpBackend;
use crate::models::{Content, GenerateContentRequest, GenerationConfig, Part};

impl<B: HttpBackend> GeminiClient<B> {
    /// Synthesize `text` with a prebuilt voice and decode the returned PCM.
    pub async fn text_to_speech(&self, text: &str, voice: Voice) -> GeminiResult<SpeechAudio> {
        let request = GenerateContentRequest {
            contents: vec![Content::from_parts(vec![Part::text(text)])],
            system_instruction: None,
            generation_config: Some(GenerationConfig::speech(voice.name())),
        };

        tracing::info!(
            model = %self.config.tts_model,
            voice = %voice,
            chars = text.chars().count(),
            "Requesting speech"
        );
        let response = self.generate(&self.config.tts_model, &request).await?;
        let inline = response.first_inline_data().ok_or(GeminiError::NoAudio)?;
        decode_inline_audio(inline)
    }
}

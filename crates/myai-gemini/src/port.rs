//! Port trait implementations for `GeminiClient`.
//!
//! This module implements the core-owned `SpeechSynthesizer`, `ChatPort` and
//! `VisionPort` traits, mapping internal `GeminiError`s to port errors.

use async_trait::async_trait;
use myai_core::{
    AssistantError, ChatMessage, ChatPort, ImageInput, SpeechAudio, SpeechSynthesizer,
    SynthesisError, VisionPort, VisionResult, Voice,
};

use crate::client::GeminiClient;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend> SpeechSynthesizer for GeminiClient<B> {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<SpeechAudio, SynthesisError> {
        self.text_to_speech(text, voice).await.map_err(|e| {
            tracing::warn!(error = %e, "Speech synthesis failed");
            SynthesisError::from(e)
        })
    }
}

#[async_trait]
impl<B: HttpBackend> ChatPort for GeminiClient<B> {
    async fn send(&self, history: &[ChatMessage], message: &str) -> Result<String, AssistantError> {
        if message.trim().is_empty() {
            return Err(AssistantError::Validation("message is empty".to_string()));
        }
        self.chat(history, message).await.map_err(|e| {
            tracing::warn!(error = %e, "Chat request failed");
            AssistantError::from(e)
        })
    }
}

#[async_trait]
impl<B: HttpBackend> VisionPort for GeminiClient<B> {
    async fn analyze(
        &self,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<VisionResult, AssistantError> {
        if image.data.is_empty() {
            return Err(AssistantError::Validation("image is empty".to_string()));
        }
        self.analyze_image(image, prompt).await.map_err(|e| {
            tracing::warn!(error = %e, "Image analysis failed");
            AssistantError::from(e)
        })
    }
}

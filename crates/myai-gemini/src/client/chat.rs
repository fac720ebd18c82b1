//! Multi-turn chat.

use myai_core::{ChatMessage, EMPTY_REPLY_FALLBACK};

use super::GeminiClient;
use crate::error::GeminiResult;
use crate::http::HttpBackend;
use crate::models::{Content, GenerateContentRequest, Part};

impl<B: HttpBackend> GeminiClient<B> {
    /// Send `message` after `history` and return the model's reply.
    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> GeminiResult<String> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|m| Content::with_role(m.role.as_str(), vec![Part::text(m.text.clone())]))
            .collect();
        contents.push(Content::with_role("user", vec![Part::text(message)]));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::from_parts(vec![Part::text(
                self.config.system_instruction.clone(),
            )])),
            generation_config: None,
        };

        tracing::info!(
            model = %self.config.chat_model,
            turns = history.len(),
            "Sending chat message"
        );
        let response = self.generate(&self.config.chat_model, &request).await?;
        Ok(response
            .text()
            .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string()))
    }
}

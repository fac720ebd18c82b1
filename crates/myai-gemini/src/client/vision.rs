//! Image analysis.

use myai_core::{ImageInput, RelatedLink, VisionResult, effective_prompt};

use super::GeminiClient;
use crate::error::GeminiResult;
use crate::http::HttpBackend;
use crate::models::{Content, GenerateContentRequest, Part};

/// Text used when the model describes nothing.
pub const EMPTY_DESCRIPTION_FALLBACK: &str = "No description generated.";

impl<B: HttpBackend> GeminiClient<B> {
    /// Describe `image`, guided by `prompt` (blank uses the default prompt).
    pub async fn analyze_image(&self, image: &ImageInput, prompt: &str) -> GeminiResult<VisionResult> {
        let request = GenerateContentRequest {
            contents: vec![Content::from_parts(vec![
                Part::inline(image.mime_type.clone(), image.data.clone()),
                Part::text(effective_prompt(prompt)),
            ])],
            ..GenerateContentRequest::default()
        };

        tracing::info!(
            model = %self.config.vision_model,
            mime_type = %image.mime_type,
            bytes = image.decoded_len(),
            "Analyzing image"
        );
        let response = self.generate(&self.config.vision_model, &request).await?;

        let related_links = response
            .web_sources()
            .filter_map(|web| {
                let uri = web.uri.clone()?;
                let title = web.title.clone().unwrap_or_else(|| uri.clone());
                Some(RelatedLink { title, uri })
            })
            .collect();

        Ok(VisionResult {
            text: response
                .text()
                .unwrap_or_else(|| EMPTY_DESCRIPTION_FALLBACK.to_string()),
            related_links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::EMPTY_DESCRIPTION_FALLBACK;
    use crate::GeminiClientConfig;
    use crate::client::GeminiClient;
    use crate::http::testing::FakeBackend;
    use myai_core::{DEFAULT_VISION_PROMPT, ImageInput};
    use serde_json::json;

    fn image() -> ImageInput {
        ImageInput::from_bytes("image/png", b"\x89PNG").unwrap()
    }

    #[tokio::test]
    async fn sends_inline_image_and_default_prompt() {
        let backend = FakeBackend::new().with_response(
            "generateContent",
            json!({ "candidates": [{ "content": { "parts": [{ "text": "A small PNG." }] } }] }),
        );
        let client =
            GeminiClient::with_backend(GeminiClientConfig::new("k"), backend.clone()).unwrap();

        let result = client.analyze_image(&image(), "   ").await.unwrap();
        assert_eq!(result.text, "A small PNG.");
        assert!(result.related_links.is_empty());

        let body = &backend.requests()[0].1;
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], image().data);
        assert_eq!(parts[1]["text"], DEFAULT_VISION_PROMPT);
    }

    #[tokio::test]
    async fn collects_related_links() {
        let backend = FakeBackend::new().with_response(
            "generateContent",
            json!({ "candidates": [{
                "content": { "parts": [{ "text": "The Eiffel Tower." }] },
                "groundingMetadata": { "groundingChunks": [
                    { "web": { "uri": "https://example.com/eiffel", "title": "Eiffel Tower" } },
                    { "web": { "uri": "https://example.com/paris" } }
                ] }
            }] }),
        );
        let client = GeminiClient::with_backend(GeminiClientConfig::new("k"), backend).unwrap();

        let result = client.analyze_image(&image(), "Where is this?").await.unwrap();
        assert_eq!(result.related_links.len(), 2);
        assert_eq!(result.related_links[0].title, "Eiffel Tower");
        assert_eq!(result.related_links[1].title, "https://example.com/paris");
    }

    #[tokio::test]
    async fn empty_description_uses_fallback() {
        let backend = FakeBackend::new().with_response("generateContent", json!({}));
        let client = GeminiClient::with_backend(GeminiClientConfig::new("k"), backend).unwrap();

        let result = client.analyze_image(&image(), "").await.unwrap();
        assert_eq!(result.text, EMPTY_DESCRIPTION_FALLBACK);
    }
}

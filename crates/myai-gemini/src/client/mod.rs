//! Gemini client built on an injectable HTTP backend.

mod chat;
mod speech;
mod vision;

pub use vision::EMPTY_DESCRIPTION_FALLBACK;

use serde_json::Value;
use url::Url;

use crate::config::GeminiClientConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{GenerateContentRequest, GenerateContentResponse};

/// Client for the Gemini `generateContent` API.
///
/// Generic over the HTTP backend so tests can inject canned responses. Use
/// [`DefaultGeminiClient`] in application code.
pub struct GeminiClient<B: HttpBackend = ReqwestBackend> {
    backend: B,
    config: GeminiClientConfig,
    base_url: Url,
}

/// Gemini client backed by reqwest.
pub type DefaultGeminiClient = GeminiClient<ReqwestBackend>;

impl GeminiClient<ReqwestBackend> {
    /// Create a client that talks to the real API.
    pub fn new(config: GeminiClientConfig) -> GeminiResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> GeminiClient<B> {
    /// Create a client with a custom HTTP backend.
    pub fn with_backend(config: GeminiClientConfig, backend: B) -> GeminiResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            backend,
            config,
            base_url,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GeminiClientConfig {
        &self.config
    }

    /// Run one `generateContent` call against `model`.
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = self.endpoint(model)?;
        let body = serde_json::to_value(request)?;
        let response: Value = self.backend.post_json(&url, &body).await?;
        serde_json::from_value(response).map_err(|e| GeminiError::InvalidResponse {
            message: e.to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> GeminiResult<Url> {
        Ok(self
            .base_url
            .join(&format!("models/{model}:generateContent"))?)
    }
}

//! HTTP backend abstraction for the Gemini API.
//!
//! A trait-based backend allows dependency injection and testing without a
//! network. The production implementation uses reqwest and does not retry:
//! every failure is reported to the caller as-is.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::GeminiClientConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::models::ApiErrorBody;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and return JSON.
///
/// This is an implementation detail - external code should use the port
/// traits implemented by `GeminiClient`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` and return the parsed JSON response.
    async fn post_json(&self, url: &Url, body: &Value) -> GeminiResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GeminiClientConfig) -> GeminiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(&self, url: &Url, body: &Value) -> GeminiResult<Value> {
        tracing::debug!(url = %url, "POST");

        let response = self
            .client
            .post(url.as_str())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&text);
            tracing::warn!(status = status.as_u16(), %message, "Gemini API error");
            return Err(GeminiError::ApiRequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Pull the human-readable message out of an API error body.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(
        |_| body.chars().take(200).collect(),
        |parsed| parsed.error.message,
    )
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

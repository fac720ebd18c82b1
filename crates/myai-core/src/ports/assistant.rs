//! Chat and image-analysis ports.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ChatMessage, ImageInput, VisionResult};

/// Errors returned by [`ChatPort`] and [`VisionPort`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// The request was rejected before it was sent.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The provider could not be reached or returned an error status.
    #[error("Assistant request failed: {0}")]
    Request(String),

    /// The provider answered with something we could not interpret.
    #[error("Unexpected assistant response: {0}")]
    InvalidResponse(String),
}

/// Multi-turn text chat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Send `message` after the prior `history` and return the reply text.
    async fn send(&self, history: &[ChatMessage], message: &str) -> Result<String, AssistantError>;
}

/// Single-shot image analysis.
#[async_trait]
pub trait VisionPort: Send + Sync {
    /// Analyze `image` guided by `prompt` (blank means the default prompt).
    async fn analyze(&self, image: &ImageInput, prompt: &str)
    -> Result<VisionResult, AssistantError>;
}

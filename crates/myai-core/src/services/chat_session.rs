//! In-memory chat transcript.
//!
//! Keeps the running history for one conversation and forwards each new
//! message, together with the prior turns, to a [`ChatPort`]. Nothing is
//! persisted; dropping the session discards the transcript.

use crate::domain::ChatMessage;
use crate::ports::{AssistantError, ChatPort};

/// Reply used when the model answers with empty text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response.";

/// User-facing message when a chat request fails.
pub const CHAT_FAILED_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// A single conversation with the assistant.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Forget the transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Send `text` and append both the user message and the reply.
    ///
    /// On failure the user message stays in the transcript (so the user can
    /// see what was sent) and no reply is appended.
    pub async fn send(
        &mut self,
        port: &dyn ChatPort,
        text: &str,
    ) -> Result<&ChatMessage, AssistantError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::Validation(
                "message must not be empty".to_string(),
            ));
        }

        let history_len = self.messages.len();
        self.messages.push(ChatMessage::user(text));

        let reply = match port.send(&self.messages[..history_len], text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Chat request failed");
                return Err(e);
            }
        };

        let reply = if reply.trim().is_empty() {
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            reply
        };

        tracing::debug!(turns = self.messages.len() + 1, "Chat reply received");
        self.messages.push(ChatMessage::model(reply));
        Ok(&self.messages[self.messages.len() - 1])
    }
}

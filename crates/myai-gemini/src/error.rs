//! Internal error types for Gemini operations.
//!
//! These errors are internal to `myai-gemini` and are mapped to core port
//! errors at the boundary (see `port.rs`).

use myai_core::{AssistantError, SynthesisError};
use thiserror::Error;

/// Result type alias for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors related to Gemini API operations.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// API request failed with an HTTP error status.
    #[error("Gemini API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, if any
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Gemini API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// A speech response carried no inline audio.
    #[error("No audio data received from API")]
    NoAudio,

    /// The inline audio payload could not be decoded.
    #[error("Failed to decode audio payload: {0}")]
    AudioDecode(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL building error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<GeminiError> for SynthesisError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::NoAudio => Self::EmptyAudio,
            GeminiError::AudioDecode(msg) => Self::Decode(msg),
            other => Self::Request(other.to_string()),
        }
    }
}

impl From<GeminiError> for AssistantError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::InvalidResponse { message } => Self::InvalidResponse(message),
            GeminiError::JsonParse(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Request(other.to_string()),
        }
    }
}

//! Public configuration for the Gemini client.

use std::time::Duration;

use myai_core::Settings;
use myai_core::settings::{DEFAULT_CHAT_MODEL, DEFAULT_TTS_MODEL, DEFAULT_VISION_MODEL};

/// Public REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// System instruction sent with every chat request.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful and knowledgeable AI assistant for MyAIWebApp.";

/// Configuration for the Gemini client.
///
/// # Example
///
/// ```
/// use myai_gemini::GeminiClientConfig;
/// use std::time::Duration;
///
/// let config = GeminiClientConfig::new("my-key")
///     .with_timeout(Duration::from_secs(30))
///     .with_tts_model("gemini-2.5-pro-preview-tts");
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// Base URL of the `generativelanguage` REST API
    pub(crate) base_url: String,
    /// API key sent in the `x-goog-api-key` header
    pub(crate) api_key: String,
    pub(crate) chat_model: String,
    pub(crate) vision_model: String,
    pub(crate) tts_model: String,
    pub(crate) system_instruction: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl GeminiClientConfig {
    /// Create a configuration with default models and the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            user_agent: concat!("myai-gemini/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Build a configuration from application settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, myai_core::SettingsError> {
        let api_key = settings.require_api_key()?;
        Ok(Self::new(api_key)
            .with_chat_model(settings.chat_model.clone())
            .with_vision_model(settings.vision_model.clone())
            .with_tts_model(settings.tts_model.clone())
            .with_timeout(Duration::from_secs(settings.request_timeout_secs)))
    }

    /// Set the base URL of the REST API.
    ///
    /// Defaults to `https://generativelanguage.googleapis.com/v1beta/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    #[must_use]
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    #[must_use]
    pub fn with_vision_model(mut self, model: impl Into<String>) -> Self {
        self.vision_model = model.into();
        self
    }

    #[must_use]
    pub fn with_tts_model(mut self, model: impl Into<String>) -> Self {
        self.tts_model = model.into();
        self
    }

    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn tts_model(&self) -> &str {
        &self.tts_model
    }
}

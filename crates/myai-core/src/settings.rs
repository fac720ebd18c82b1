//! Settings domain types and validation.
//!
//! Settings come from the process environment (the CLI loads `.env` first).
//! Lookup is injected so tests never have to mutate the real environment.

use serde::{Deserialize, Serialize};

use crate::domain::Voice;

/// Default model for chat.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Default model for image analysis.
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash";

/// Default model for speech synthesis.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default HTTP request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default extra time to wait for a playback completion signal, in milliseconds.
pub const DEFAULT_PLAYBACK_GRACE_MS: u64 = 5_000;

/// Environment variable names.
pub mod env {
    pub const API_KEY: &str = "GEMINI_API_KEY";
    pub const API_KEY_FALLBACK: &str = "API_KEY";
    pub const CHAT_MODEL: &str = "MYAI_CHAT_MODEL";
    pub const VISION_MODEL: &str = "MYAI_VISION_MODEL";
    pub const TTS_MODEL: &str = "MYAI_TTS_MODEL";
    pub const VOICE: &str = "MYAI_VOICE";
    pub const REQUEST_TIMEOUT_SECS: &str = "MYAI_REQUEST_TIMEOUT_SECS";
    pub const PLAYBACK_GRACE_MS: &str = "MYAI_PLAYBACK_GRACE_MS";
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API key for the hosted model.
    pub api_key: Option<String>,
    pub chat_model: String,
    pub vision_model: String,
    pub tts_model: String,
    /// Voice used when none is chosen explicitly.
    pub default_voice: Voice,
    pub request_timeout_secs: u64,
    /// `0` disables the playback completion watchdog.
    pub playback_grace_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            default_voice: Voice::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            playback_grace_ms: DEFAULT_PLAYBACK_GRACE_MS,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self {
            api_key: get(env::API_KEY).or_else(|| get(env::API_KEY_FALLBACK)),
            ..Self::default()
        };

        if let Some(model) = get(env::CHAT_MODEL) {
            settings.chat_model = model;
        }
        if let Some(model) = get(env::VISION_MODEL) {
            settings.vision_model = model;
        }
        if let Some(model) = get(env::TTS_MODEL) {
            settings.tts_model = model;
        }
        if let Some(voice) = get(env::VOICE) {
            settings.default_voice = voice
                .parse()
                .map_err(|_| SettingsError::InvalidVoice(voice.clone()))?;
        }
        if let Some(raw) = get(env::REQUEST_TIMEOUT_SECS) {
            settings.request_timeout_secs = parse_number(env::REQUEST_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = get(env::PLAYBACK_GRACE_MS) {
            settings.playback_grace_ms = parse_number(env::PLAYBACK_GRACE_MS, &raw)?;
        }

        validate_settings(&settings)?;
        Ok(settings)
    }

    /// The API key, or [`SettingsError::MissingApiKey`].
    pub fn require_api_key(&self) -> Result<&str, SettingsError> {
        self.api_key.as_deref().ok_or(SettingsError::MissingApiKey)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("No API key configured; set {} (or {})", env::API_KEY, env::API_KEY_FALLBACK)]
    MissingApiKey,

    #[error("Unknown voice '{0}' (expected one of: Kore, Puck, Fenrir, Zephyr)")]
    InvalidVoice(String),

    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("Request timeout must be between 1 and 600 seconds, got {0}")]
    InvalidRequestTimeout(u64),

    #[error("Playback grace must be at most 60000 ms (0 disables it), got {0}")]
    InvalidPlaybackGrace(u64),

    #[error("Model name must not be empty")]
    EmptyModelName,
}

/// Validate a settings value.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if !(1..=600).contains(&settings.request_timeout_secs) {
        return Err(SettingsError::InvalidRequestTimeout(
            settings.request_timeout_secs,
        ));
    }
    if settings.playback_grace_ms > 60_000 {
        return Err(SettingsError::InvalidPlaybackGrace(settings.playback_grace_ms));
    }
    if [&settings.chat_model, &settings.vision_model, &settings.tts_model]
        .iter()
        .any(|m| m.trim().is_empty())
    {
        return Err(SettingsError::EmptyModelName);
    }
    Ok(())
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, SettingsError> {
    raw.trim()
        .parse()
        .map_err(|_| SettingsError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

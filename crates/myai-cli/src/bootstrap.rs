//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI: settings from the environment, the Gemini client, and the speech
//! playback controller on the local output device.

use std::sync::Arc;

use myai_core::{ChatPort, Settings, SpeechSynthesizer, VisionPort};
use myai_gemini::{DefaultGeminiClient, GeminiClientConfig};
use myai_voice::{PlaybackConfig, PlaybackController, PlaybackEvent};
use tokio::sync::mpsc;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Read settings from the environment, letting `--api-key` win.
    pub fn from_env(api_key: Option<String>) -> Result<Self, CliError> {
        let settings = Settings::from_env()?;
        Ok(Self::with_api_key(settings, api_key))
    }

    fn with_api_key(mut settings: Settings, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            settings.api_key = Some(key);
        }
        Self { settings }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub settings: Settings,
    gemini: Arc<DefaultGeminiClient>,
}

impl CliContext {
    pub fn chat(&self) -> &dyn ChatPort {
        self.gemini.as_ref()
    }

    pub fn vision(&self) -> &dyn VisionPort {
        self.gemini.as_ref()
    }

    /// A fresh playback controller. The output device is opened on first
    /// use and released when the controller is dropped.
    pub fn speech(&self) -> (PlaybackController, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let synthesizer: Arc<dyn SpeechSynthesizer> = self.gemini.clone();
        PlaybackController::with_local_output(
            synthesizer,
            PlaybackConfig::from_settings(&self.settings),
        )
    }
}

/// Build the CLI context. Fails when no API key is configured.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let gemini_config = GeminiClientConfig::from_settings(&config.settings)?;
    let gemini = DefaultGeminiClient::new(gemini_config)
        .map_err(|e| CliError::Config(e.to_string()))?;

    tracing::debug!(
        chat_model = %config.settings.chat_model,
        tts_model = %config.settings.tts_model,
        voice = %config.settings.default_voice,
        "CLI context ready"
    );

    Ok(CliContext {
        settings: config.settings,
        gemini: Arc::new(gemini),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_flag_overrides_environment() {
        let settings = Settings {
            api_key: Some("from-env".to_string()),
            ..Settings::default()
        };
        let config = CliConfig::with_api_key(settings, Some("from-flag".to_string()));
        assert_eq!(config.settings.api_key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_blank_api_key_flag_is_ignored() {
        let settings = Settings {
            api_key: Some("from-env".to_string()),
            ..Settings::default()
        };
        let config = CliConfig::with_api_key(settings, Some("  ".to_string()));
        assert_eq!(config.settings.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_bootstrap_requires_api_key() {
        let config = CliConfig::with_api_key(Settings::default(), None);
        let err = bootstrap(config).err().unwrap();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bootstrap_with_key_does_not_open_audio() {
        let config = CliConfig::with_api_key(Settings::default(), Some("k".to_string()));
        let ctx = bootstrap(config).unwrap();
        let (controller, _events) = ctx.speech();
        assert!(!controller.is_output_acquired());
    }
}

//! CLI-specific error types and mappings.
//!
//! Adapter and core errors are folded into [`CliError`], which decides the
//! process exit code and the message printed to the user.

use myai_core::{AssistantError, SettingsError, VisionInputError};
use myai_voice::VoiceError;
use thiserror::Error;

/// Shown when image analysis fails for any reason other than bad input.
pub const VISION_FAILED_MESSAGE: &str = "Error analyzing image. Please try again.";

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, image file).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The hosted model could not be reached or answered badly.
    #[error("{0}")]
    Service(String),

    /// Speech synthesis or playback failed.
    #[error("{0}")]
    Speech(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Service(_) => 69,  // EX_UNAVAILABLE
            Self::Speech(_) => 1,
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<AssistantError> for CliError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::Validation(msg) => Self::Arguments(msg),
            other => Self::Service(other.to_string()),
        }
    }
}

impl From<VisionInputError> for CliError {
    fn from(err: VisionInputError) -> Self {
        match err {
            VisionInputError::Io(e) => Self::Io(e.to_string()),
            other => Self::Arguments(other.to_string()),
        }
    }
}

impl From<VoiceError> for CliError {
    fn from(err: VoiceError) -> Self {
        match err.user_message() {
            Some(message) => {
                tracing::debug!(error = %err, "Speech failed");
                Self::Speech(message.to_string())
            }
            None => Self::Arguments(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Io(err.to_string())
    }
}

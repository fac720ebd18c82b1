//! Core domain types and port definitions for myai.
//!
//! This crate has no knowledge of HTTP, JSON wire formats or audio devices.
//! Adapters (`myai-gemini`, `myai-voice`) implement the [`ports`] defined here.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ChatMessage, ChatRole, DEFAULT_VISION_PROMPT, EmptyUtterance, ImageInput, Navigator,
    RelatedLink, Screen, SpeechAudio, UnknownScreen, UnknownVoice, Utterance, VisionInputError,
    VisionResult, Voice, VoiceGender, effective_prompt,
};
pub use ports::{AssistantError, ChatPort, SpeechSynthesizer, SynthesisError, VisionPort};
pub use services::{CHAT_FAILED_MESSAGE, ChatSession, EMPTY_REPLY_FALLBACK};
pub use settings::{Settings, SettingsError, validate_settings};

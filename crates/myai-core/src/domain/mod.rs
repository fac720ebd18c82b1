//! Domain types shared by every adapter.

pub mod audio;
pub mod chat;
pub mod screen;
pub mod utterance;
pub mod vision;
pub mod voice;

pub use audio::SpeechAudio;
pub use chat::{ChatMessage, ChatRole};
pub use screen::{Navigator, Screen, UnknownScreen};
pub use utterance::{EmptyUtterance, Utterance};
pub use vision::{
    DEFAULT_VISION_PROMPT, ImageInput, RelatedLink, VisionInputError, VisionResult,
    effective_prompt,
};
pub use voice::{UnknownVoice, Voice, VoiceGender};

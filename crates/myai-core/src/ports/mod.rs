//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from infrastructure. They use
//! only domain types: no HTTP, JSON or audio-device details.

pub mod assistant;
pub mod speech;

pub use assistant::{AssistantError, ChatPort, VisionPort};
pub use speech::{SpeechSynthesizer, SynthesisError};

#[cfg(test)]
pub use assistant::MockChatPort;

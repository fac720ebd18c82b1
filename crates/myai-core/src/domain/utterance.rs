//! A single text-to-speech request.

use thiserror::Error;

use super::voice::Voice;

/// Returned when an utterance would carry no speakable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Utterance text must not be empty")]
pub struct EmptyUtterance;

/// One text-to-speech request unit: text plus voice selection.
///
/// Immutable once built. Construction fails when the text trims to empty,
/// so holding an `Utterance` proves there is something to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
    voice: Voice,
}

impl Utterance {
    pub fn new(text: impl Into<String>, voice: Voice) -> Result<Self, EmptyUtterance> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyUtterance);
        }
        Ok(Self { text, voice })
    }

    /// The text exactly as submitted (not trimmed).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn voice(&self) -> Voice {
        self.voice
    }

    /// Number of characters in the text, as shown next to the input box.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

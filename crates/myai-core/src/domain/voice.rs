//! Prebuilt speech voices offered by the synthesis service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Voice gender, as advertised in the voice picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoiceGender {
    Female,
    Male,
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => f.write_str("Female"),
            Self::Male => f.write_str("Male"),
        }
    }
}

/// One of the fixed prebuilt voices.
///
/// The serialized form is the provider's voice name (`"Kore"`, `"Puck"`, ...),
/// which is also what goes on the wire in a speech request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    Kore,
    Puck,
    Fenrir,
    Zephyr,
}

impl Voice {
    /// Every selectable voice, in picker order.
    pub const ALL: [Self; 4] = [Self::Kore, Self::Puck, Self::Fenrir, Self::Zephyr];

    /// Provider voice name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kore => "Kore",
            Self::Puck => "Puck",
            Self::Fenrir => "Fenrir",
            Self::Zephyr => "Zephyr",
        }
    }

    #[must_use]
    pub const fn gender(self) -> VoiceGender {
        match self {
            Self::Kore | Self::Zephyr => VoiceGender::Female,
            Self::Puck | Self::Fenrir => VoiceGender::Male,
        }
    }

    /// Display label, e.g. `"Kore (Female)"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.gender())
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a voice id does not name one of [`Voice::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown voice '{0}' (expected one of: Kore, Puck, Fenrir, Zephyr)")]
pub struct UnknownVoice(pub String);

impl FromStr for Voice {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|voice| voice.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVoice(s.to_string()))
    }
}

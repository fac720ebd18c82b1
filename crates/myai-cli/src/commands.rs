//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use myai_core::Voice;

/// Each command maps to one screen of the assistant.
#[derive(Subcommand)]
pub enum Commands {
    /// Chat with the assistant (interactive when no message is given)
    Chat {
        /// Send a single message and print the reply
        message: Option<String>,
    },

    /// Describe an image file
    Vision {
        /// Path to a PNG, JPEG, WebP, GIF or HEIC image
        image: PathBuf,
        /// What to ask about the image (defaults to a full description)
        #[arg(short, long, default_value = "")]
        prompt: String,
    },

    /// Speak text aloud on the default output device
    Speak {
        /// Text to speak
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Voice to use (Kore, Puck, Fenrir, Zephyr)
        #[arg(long)]
        voice: Option<Voice>,
    },

    /// List the available voices
    Voices,

    /// Interactive shell with Home, AI Chat, Vision and Speech screens
    Shell,
}

//! Screen selection for the front-end.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A top-level screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Chat,
    Vision,
    Speech,
}

impl Screen {
    /// Navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Chat, Self::Vision, Self::Speech];

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Chat => "AI Chat",
            Self::Vision => "Vision",
            Self::Speech => "Speech",
        }
    }

    /// Short lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Chat => "chat",
            Self::Vision => "vision",
            Self::Speech => "speech",
        }
    }

    /// Blurb shown on the home screen's feature card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => "Start here and pick a feature.",
            Self::Chat => "Have natural conversations with an AI assistant.",
            Self::Vision => "Upload images to get detailed descriptions and insights.",
            Self::Speech => "Turn text into lifelike speech with a choice of voices.",
        }
    }

    /// Screens linked from the home screen.
    pub fn features() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|s| *s != Self::Home)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown screen '{0}' (expected home, chat, vision or speech)")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "chat" => Ok(Self::Chat),
            "vision" => Ok(Self::Vision),
            "speech" | "tts" => Ok(Self::Speech),
            _ => Err(UnknownScreen(s.to_string())),
        }
    }
}

/// Tracks the currently selected screen.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// A navigator showing [`Screen::Home`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `screen`. Returns `true` if the screen changed.
    pub fn navigate(&mut self, screen: Screen) -> bool {
        if self.current == screen {
            return false;
        }
        tracing::debug!(from = ?self.current, to = ?screen, "Navigating");
        self.current = screen;
        true
    }

    /// Shortcut for `navigate(Screen::Home)`.
    pub fn home(&mut self) -> bool {
        self.navigate(Screen::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigator_starts_at_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn navigate_reports_changes() {
        let mut nav = Navigator::new();
        assert!(nav.navigate(Screen::Speech));
        assert_eq!(nav.current(), Screen::Speech);
        assert!(!nav.navigate(Screen::Speech));
        assert!(nav.home());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn features_exclude_home() {
        let features: Vec<_> = Screen::features().collect();
        assert_eq!(features, vec![Screen::Chat, Screen::Vision, Screen::Speech]);
    }

    #[test]
    fn parse_screen_names() {
        assert_eq!("Chat".parse::<Screen>().unwrap(), Screen::Chat);
        assert_eq!("tts".parse::<Screen>().unwrap(), Screen::Speech);
        assert!("settings".parse::<Screen>().is_err());
    }

    #[test]
    fn keys_parse_back() {
        for screen in Screen::ALL {
            assert_eq!(screen.key().parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn labels_match_navigation_bar() {
        let labels: Vec<_> = Screen::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "AI Chat", "Vision", "Speech"]);
    }
}

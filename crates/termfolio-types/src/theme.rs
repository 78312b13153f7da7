//! Dark/light theme state.
//!
//! Created once at the application root and handed to whatever paints the
//! screen. Only the designated setters change it.

use serde::{Deserialize, Serialize};

/// The two presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Holder for the current theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    /// Start in the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Start from a dark-mode flag.
    pub fn from_dark_flag(dark: bool) -> Self {
        Self::new(if dark { Theme::Dark } else { Theme::Light })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Flip between dark and light. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        log::debug!("theme toggled to {:?}", self.theme);
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        let state = ThemeState::default();
        assert!(state.is_dark());
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_twice_back() {
        let mut state = ThemeState::default();
        assert_eq!(state.toggle(), Theme::Light);
        assert!(!state.is_dark());
        assert_eq!(state.toggle(), Theme::Dark);
    }

    #[test]
    fn from_dark_flag() {
        assert!(ThemeState::from_dark_flag(true).is_dark());
        assert!(!ThemeState::from_dark_flag(false).is_dark());
    }

    #[test]
    fn set_overrides() {
        let mut state = ThemeState::new(Theme::Dark);
        state.set(Theme::Light);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn theme_deserializes_lowercase() {
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}

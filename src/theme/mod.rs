//! Light/dark theme preference.

pub mod store;

use serde::{Deserialize, Serialize};

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-toggle-icon fas fa-sun",
            Theme::Dark => "theme-toggle-icon fas fa-moon",
        }
    }

    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Owns the current theme and keeps it persisted. Storage trouble is logged and
/// otherwise ignored: the theme still switches for this session.
pub struct ThemeManager {
    current: Theme,
    store: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(%e, "Preference storage not available, using default theme");
                None
            }
        };
        let current = stored.as_deref().and_then(Theme::parse).unwrap_or_default();
        let mut manager = Self { current, store };
        manager.apply(current);
        manager
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(%e, "Theme preference not saved");
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        tracing::debug!(theme = next.as_str(), "Theme toggled");
        next
    }
}

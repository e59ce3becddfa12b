//! Color Theme
//!
//! Light/dark preference remembered in its own storage slot.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label of the button that switches away from this theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }

    /// Stored preference, `Light` when absent or unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.read(THEME_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("[THEME] ignoring malformed preference: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("[THEME] {}", e);
                Theme::default()
            }
        }
    }

    pub fn save(self, store: &impl KeyValueStore) {
        let result = serde_json::to_string(&self)
            .map_err(|e| e.to_string())
            .and_then(|json| store.write(THEME_KEY, &json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            log::warn!("[THEME] {}", e);
        }
    }
}

//! Light/dark display mode, persisted across sessions.
//!
//! [`ThemeState`] is the only state shared by otherwise independent pages.
//! It has a single writer ([`ThemeState::toggle`] / [`ThemeState::set`])
//! and any number of readers. The mode is updated before the value is
//! persisted and before subscribers run, so no reader ever sees a stale
//! value during a toggle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StorageError};
use crate::storage::PreferenceStore;

/// Key under which the theme is persisted.
pub const THEME_KEY: &str = "theme";

/// Display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the persisted form, also used as the CSS data-theme value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns the display name for the mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ConfigError::InvalidColorScheme(s.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback run after every theme change.
pub type ThemeListener = Box<dyn FnMut(ThemeMode)>;

/// Session-wide theme state backed by a preference store.
pub struct ThemeState {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
    persistent: bool,
    listeners: Vec<ThemeListener>,
}

impl ThemeState {
    /// Initializes the theme for a new session.
    ///
    /// Resolution order: the persisted value, then `system_preference`,
    /// then [`ThemeMode::Light`]. Storage failures are logged and skipped.
    pub fn initialize(store: Box<dyn PreferenceStore>, system_preference: Option<ThemeMode>) -> Self {
        let persisted = match store.load(THEME_KEY) {
            Ok(Some(value)) => match value.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring persisted theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Theme preference could not be read");
                None
            }
        };

        let mode = persisted.or(system_preference).unwrap_or_default();
        tracing::info!(
            theme = %mode,
            from_storage = persisted.is_some(),
            "Theme initialized"
        );

        Self {
            mode,
            store,
            persistent: true,
            listeners: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// False once a write has failed; later changes stay session-only.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    /// Sets the mode, persists it and notifies subscribers.
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        tracing::info!(theme = %mode, "Theme changed");

        if self.persistent {
            if let Err(e) = self.store.save(THEME_KEY, mode.as_str()) {
                self.degrade(e);
            }
        }

        for listener in &mut self.listeners {
            listener(mode);
        }
    }

    /// Registers a callback run synchronously after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Releases the backing store, e.g. to re-initialize a new session from it.
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }

    fn degrade(&mut self, error: StorageError) {
        tracing::warn!(error = %error, "Theme persistence unavailable, keeping session-only theme");
        self.persistent = false;
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("persistent", &self.persistent)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::{MemoryStore, UnavailableStore};

    #[test]
    fn test_default_is_light() {
        let theme = ThemeState::initialize(Box::new(MemoryStore::new()), None);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_initialization_precedence() {
        // System preference used when nothing is persisted
        let theme = ThemeState::initialize(Box::new(MemoryStore::new()), Some(ThemeMode::Dark));
        assert_eq!(theme.mode(), ThemeMode::Dark);

        // Persisted value beats system preference
        let store = MemoryStore::new().with_value(THEME_KEY, "light");
        let theme = ThemeState::initialize(Box::new(store), Some(ThemeMode::Dark));
        assert_eq!(theme.mode(), ThemeMode::Light);

        // Garbage in storage falls through to system preference
        let store = MemoryStore::new().with_value(THEME_KEY, "sepia");
        let theme = ThemeState::initialize(Box::new(store), Some(ThemeMode::Dark));
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_involution() {
        let mut theme = ThemeState::initialize(Box::new(MemoryStore::new()), None);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);

        let mut theme = ThemeState::initialize(Box::new(MemoryStore::new()), Some(ThemeMode::Dark));
        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut theme = ThemeState::initialize(Box::new(MemoryStore::new()), None);
        theme.toggle();

        let reloaded = ThemeState::initialize(theme.into_store(), None);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let store = UnavailableStore::new("disabled");
        let mut theme = ThemeState::initialize(Box::new(store), None);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert!(theme.is_persistent());

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert!(!theme.is_persistent());
        assert!(theme.is_dark());

        let reloaded = ThemeState::initialize(theme.into_store(), None);
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_subscribers_see_new_mode() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut theme = ThemeState::initialize(Box::new(MemoryStore::new()), None);

        let sink = Rc::clone(&seen);
        theme.subscribe(move |mode| sink.borrow_mut().push(mode));

        theme.toggle();
        theme.toggle();
        theme.set(ThemeMode::Dark);
        assert_eq!(
            *seen.borrow(),
            vec![ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark]
        );
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!(
            "blue".parse::<ThemeMode>(),
            Err(ConfigError::InvalidColorScheme("blue".to_string()))
        );
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}

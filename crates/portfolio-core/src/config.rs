//! Site configuration.
//!
//! Defaults come from the platform data directory; environment variables
//! and command line flags override them through the `with_*` builders.

use std::path::{Path, PathBuf};

use crate::contact::OutboxSink;
use crate::error::ConfigError;
use crate::route::Route;
use crate::storage::{FileStore, MemoryStore, PreferenceStore};
use crate::theme::ThemeMode;

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "PORTFOLIO_DATA_DIR";

/// System color scheme signal, `light` or `dark`.
pub const COLOR_SCHEME_ENV: &str = "PORTFOLIO_COLOR_SCHEME";

/// Configuration for one run of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Where preferences and the contact outbox live.
    pub data_dir: PathBuf,
    /// System preference used when no theme was persisted.
    pub color_scheme: Option<ThemeMode>,
    /// Page shown at startup.
    pub initial_route: Route,
    /// When false the theme never touches disk.
    pub persist_theme: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("portfolio"),
            color_scheme: None,
            initial_route: Route::Home,
            persist_theme: true,
        }
    }
}

impl SiteConfig {
    /// Create a configuration rooted at a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `PORTFOLIO_DATA_DIR` and `PORTFOLIO_COLOR_SCHEME`.
    ///
    /// Each variable is applied on its own: an invalid one is reported in
    /// the returned errors and leaves only its own field at the default.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SiteConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(scheme) = lookup(COLOR_SCHEME_ENV).filter(|s| !s.trim().is_empty()) {
            match scheme.parse::<ThemeMode>() {
                Ok(mode) => config.color_scheme = Some(mode),
                Err(e) => errors.push(e),
            }
        }
        (config, errors)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_color_scheme(mut self, scheme: ThemeMode) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    pub fn with_initial_route(mut self, route: Route) -> Self {
        self.initial_route = route;
        self
    }

    /// Keep the theme in memory only.
    pub fn ephemeral(mut self) -> Self {
        self.persist_theme = false;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The store backing the theme preference.
    pub fn preference_store(&self) -> Box<dyn PreferenceStore> {
        if self.persist_theme {
            Box::new(FileStore::in_dir(&self.data_dir))
        } else {
            Box::new(MemoryStore::new())
        }
    }

    /// The sink for contact form submissions.
    pub fn contact_sink(&self) -> OutboxSink {
        OutboxSink::in_dir(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let (config, errors) = SiteConfig::from_lookup(lookup(&[]));
        assert!(errors.is_empty());
        assert!(config.data_dir.ends_with("portfolio"));
        assert_eq!(config.color_scheme, None);
        assert_eq!(config.initial_route, Route::Home);
        assert!(config.persist_theme);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let (config, errors) = SiteConfig::from_lookup(lookup(&[
            (DATA_DIR_ENV, "/tmp/site"),
            (COLOR_SCHEME_ENV, "DARK"),
        ]));
        assert!(errors.is_empty());
        assert_eq!(config.data_dir, PathBuf::from("/tmp/site"));
        assert_eq!(config.color_scheme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_invalid_color_scheme_keeps_data_dir() {
        let (config, errors) = SiteConfig::from_lookup(lookup(&[
            (DATA_DIR_ENV, "/srv/portfolio"),
            (COLOR_SCHEME_ENV, "auto"),
        ]));
        assert_eq!(errors, vec![ConfigError::InvalidColorScheme("auto".to_string())]);
        assert_eq!(config.data_dir(), Path::new("/srv/portfolio"));
        assert_eq!(config.color_scheme, None);
    }

    #[test]
    fn test_builders() {
        let config = SiteConfig::new("/data")
            .with_color_scheme(ThemeMode::Light)
            .with_initial_route(Route::Contact)
            .ephemeral();
        assert_eq!(config.data_dir(), Path::new("/data"));
        assert_eq!(config.initial_route, Route::Contact);
        assert!(!config.persist_theme);
        assert_eq!(config.contact_sink().path(), Path::new("/data/outbox.jsonl"));
    }

    #[test]
    fn test_preference_store_selection() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = SiteConfig::new(dir.path()).preference_store();
        store.save("theme", "dark").unwrap();
        assert!(dir.path().join(FileStore::FILE_NAME).exists());

        let ephemeral = SiteConfig::new(dir.path().join("unused")).ephemeral();
        ephemeral.preference_store().save("theme", "dark").unwrap();
        assert!(!dir.path().join("unused").exists());
    }
}

//! Theme context for the site.
//!
//! The root component provides a `Signal<ThemeState>` as context. Every
//! visual component reads the mode from it; only [`ThemeToggle`] writes.

use dioxus::desktop::tao::window::Theme;
use dioxus::prelude::*;
use portfolio_core::{SiteConfig, ThemeMode, ThemeState};

/// Creates the theme state for a session and provides it as context.
///
/// A configured color scheme wins over the one the OS reports for the
/// window. Either only applies when no theme has been persisted.
pub fn use_theme_provider(config: &SiteConfig) -> Signal<ThemeState> {
    let config = config.clone();
    use_context_provider(move || {
        let preference =
            system_preference(config.color_scheme, || dioxus::desktop::window().theme());
        let mut state = ThemeState::initialize(config.preference_store(), Some(preference));
        state.subscribe(|mode| tracing::debug!(theme = %mode, "Theme subscribers notified"));
        Signal::new(state)
    })
}

fn system_preference(configured: Option<ThemeMode>, os_theme: impl FnOnce() -> Theme) -> ThemeMode {
    configured.unwrap_or_else(|| {
        let mode = mode_for(os_theme());
        tracing::debug!(theme = %mode, "Using OS color scheme");
        mode
    })
}

fn mode_for(theme: Theme) -> ThemeMode {
    match theme {
        Theme::Dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Current display mode from context.
pub fn use_theme_mode() -> ThemeMode {
    let theme = use_context::<Signal<ThemeState>>();
    theme.read().mode()
}

/// Root wrapper that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let mode = use_theme_mode();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{mode.as_str()}",
            {children}
        }
    }
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let mode = theme.read().mode();
    let icon = match mode {
        ThemeMode::Dark => "\u{2600}",
        ThemeMode::Light => "\u{263E}",
    };
    let title = format!("Switch to {} mode", mode.toggled().display_name().to_lowercase());

    rsx! {
        button {
            class: "icon-button theme-toggle",
            "aria-label": "Toggle theme",
            title: "{title}",
            onclick: move |_| {
                theme.write().toggle();
            },
            "{icon}"
        }
    }
}

//! Personal portfolio site.
//!
//! A Dioxus desktop application rendering the content model from
//! `portfolio-core`: home, about, projects (with category filter and
//! detail pages) and contact.

use std::sync::OnceLock;

use portfolio_core::SiteConfig;

pub mod components;
pub mod pages;
pub mod theme;

/// Configuration resolved by `main` before launch.
pub static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Stylesheet embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// The active configuration, falling back to defaults when unset.
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

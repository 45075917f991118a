//! Entry point for the portfolio site.
//!
//! Resolves configuration from the environment and command line, then
//! opens the site in a Dioxus desktop window.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use portfolio_core::{PROFILE, Route, SiteConfig, ThemeMode};
use portfolio_site::components::RootApp;
use portfolio_site::{SITE_CONFIG, STYLES_CSS};

/// Filter used when neither `--log` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "portfolio_site=info,portfolio_core=info";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "portfolio-site")]
#[command(about = "Personal portfolio site")]
struct Args {
    /// Directory for saved preferences and the contact outbox
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Path to open first, e.g. /projects/job-portal
    #[arg(short, long)]
    route: Option<String>,

    /// System color scheme to use when no theme has been saved (light or dark)
    #[arg(long)]
    prefer: Option<ThemeMode>,

    /// Keep the theme choice in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Log filter directives (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Starting portfolio site");

    let (env_config, errors) = SiteConfig::from_env();
    for e in &errors {
        tracing::warn!(error = %e, "Ignoring environment setting");
    }
    let config = apply_args(env_config, &args);
    tracing::info!(
        data_dir = %config.data_dir().display(),
        route = %config.initial_route,
        persist_theme = config.persist_theme,
        "Configuration resolved"
    );
    SITE_CONFIG.set(config).ok();

    let title = format!("{} | Portfolio", PROFILE.name);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);
}

/// Command line flags applied on top of the environment.
fn apply_args(mut config: SiteConfig, args: &Args) -> SiteConfig {
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(route) = &args.route {
        config = config.with_initial_route(Route::parse(route));
    }
    if let Some(scheme) = args.prefer {
        config = config.with_color_scheme(scheme);
    }
    if args.ephemeral {
        config = config.ephemeral();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("portfolio-site").chain(argv.iter().copied()))
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = args(&["--data-dir", "/tmp/site", "--route", "/projects/job-portal", "--prefer", "dark"]);
        let config = apply_args(SiteConfig::new("/elsewhere"), &args);

        assert_eq!(config.data_dir(), std::path::Path::new("/tmp/site"));
        assert_eq!(config.initial_route, Route::ProjectDetail { id: "job-portal".into() });
        assert_eq!(config.color_scheme, Some(ThemeMode::Dark));
        assert!(config.persist_theme);
    }

    #[test]
    fn test_ephemeral_flag() {
        let config = apply_args(SiteConfig::default(), &args(&["--ephemeral"]));
        assert!(!config.persist_theme);
        assert_eq!(config.initial_route, Route::Home);
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        let result = Args::try_parse_from(["portfolio-site", "--prefer", "sepia"]);
        assert!(result.is_err());
    }
}

//! Root application component.

use dioxus::prelude::*;
use portfolio_core::{NavShell, PROFILE, Route};

use crate::pages::{
    AboutPage, ContactPage, HomePage, NotFoundPage, ProjectDetailPage, ProjectsPage,
};
use crate::site_config;
use crate::theme::{ThemedRoot, use_theme_provider};

use super::{Footer, Header};

/// Root application component.
///
/// Provides the theme and navigation shell as context, then renders the
/// page for the current route between the header and footer.
#[component]
pub fn RootApp() -> Element {
    let config = use_hook(site_config);
    use_theme_provider(&config);

    let initial = config.initial_route.clone();
    use_context_provider(move || Signal::new(NavShell::new(initial)));

    use_drop(|| {
        tracing::info!("Shutting down portfolio site");
    });

    rsx! {
        ThemedRoot {
            div {
                class: "site",

                Header {}

                main {
                    class: "site-main",
                    CurrentPage {}
                }

                Footer {}
            }
        }
    }
}

/// Renders the page for the shell's current route.
#[component]
fn CurrentPage() -> Element {
    let shell = use_context::<Signal<NavShell>>();
    let route = shell.read().route().clone();

    // Keep the window title in step with the route
    use_effect(move || {
        let title = format!("{} | {}", shell.read().route().title(), PROFILE.name);
        dioxus::desktop::window().set_title(&title);
    });

    match route {
        Route::Home => rsx! { HomePage {} },
        Route::About => rsx! { AboutPage {} },
        Route::Projects => rsx! { ProjectsPage {} },
        Route::ProjectDetail { id } => rsx! { ProjectDetailPage { id } },
        Route::Contact => rsx! { ContactPage {} },
        Route::NotFound { path } => rsx! { NotFoundPage { path } },
    }
}

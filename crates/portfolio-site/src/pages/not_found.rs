use dioxus::prelude::*;
use portfolio_core::Route;

use crate::components::RouteLink;

/// Shown for any path no route matches.
#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        div {
            class: "page fallback",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}" }
            RouteLink { to: Route::Home, class: "text-link", "Back to home" }
        }
    }
}

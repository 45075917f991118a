//! In-app link that drives the navigation shell instead of the webview.

use dioxus::prelude::*;
use portfolio_core::{NavShell, Route};

#[component]
pub fn RouteLink(to: Route, #[props(default)] class: String, children: Element) -> Element {
    let mut shell = use_context::<Signal<NavShell>>();
    let href = to.path();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                shell.write().navigate(to.clone());
            },
            {children}
        }
    }
}

/// Anchor for links that leave the site.
#[component]
pub fn ExternalLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}

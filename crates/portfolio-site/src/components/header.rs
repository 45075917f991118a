//! Sticky site header with desktop nav, mobile menu and theme toggle.

use dioxus::prelude::*;
use portfolio_core::{NAV_LINKS, NavLink, NavShell, PROFILE, Route};

use crate::theme::ThemeToggle;

use super::RouteLink;

#[component]
pub fn Header() -> Element {
    let mut shell = use_context::<Signal<NavShell>>();
    let (menu_open, can_go_back) = {
        let shell = shell.read();
        (shell.menu_open(), shell.can_go_back())
    };
    let menu_icon = if menu_open { "\u{2715}" } else { "\u{2630}" };

    rsx! {
        header {
            class: "site-header",

            div {
                class: "header-inner",

                RouteLink {
                    to: Route::Home,
                    class: "brand",
                    span { class: "brand-mark", "</>" }
                    span { class: "brand-name", "{PROFILE.name}" }
                }

                nav {
                    class: "nav-desktop",
                    for link in NAV_LINKS {
                        NavItem { key: "{link.path}", link, mobile: false }
                    }
                }

                div {
                    class: "header-actions",

                    if can_go_back {
                        button {
                            class: "icon-button back-button",
                            "aria-label": "Go back",
                            title: "Back",
                            onclick: move |_| {
                                shell.write().back();
                            },
                            "\u{2190}"
                        }
                    }

                    ThemeToggle {}

                    button {
                        class: "icon-button menu-toggle",
                        "aria-label": "Toggle mobile menu",
                        onclick: move |_| {
                            shell.write().toggle_menu();
                        },
                        "{menu_icon}"
                    }
                }
            }

            if menu_open {
                nav {
                    class: "nav-mobile",
                    for link in NAV_LINKS {
                        NavItem { key: "{link.path}", link, mobile: true }
                    }
                }
            }
        }
    }
}

/// A single nav entry, highlighted when its path is the current route.
#[component]
fn NavItem(link: NavLink, mobile: bool) -> Element {
    let shell = use_context::<Signal<NavShell>>();
    let active = shell.read().is_active(link.path);
    let base = if mobile { "nav-link mobile" } else { "nav-link" };
    let class = if active { format!("{base} active") } else { base.to_string() };

    rsx! {
        RouteLink {
            to: Route::parse(link.path),
            class,
            "{link.label}"
        }
    }
}

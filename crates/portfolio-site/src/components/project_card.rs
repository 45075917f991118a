//! Project card used on the listing and home pages.

use dioxus::prelude::*;
use portfolio_core::{ProjectRecord, Route};

use super::{ExternalLink, RouteLink, TechTags};

#[component]
pub fn ProjectCard(project: &'static ProjectRecord) -> Element {
    rsx! {
        article {
            class: "card project-card",

            div {
                class: "card-media",
                img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                div {
                    class: "card-overlay",
                    h3 { "{project.title}" }
                    p { "{project.description}" }
                }
            }

            div {
                class: "card-body",

                div {
                    class: "card-heading",
                    h3 { "{project.title}" }
                    span { class: "badge", "{project.category}" }
                }

                p { class: "card-text clamp", "{project.description}" }

                TechTags { technologies: project.technologies, compact: true }

                RouteLink {
                    to: Route::ProjectDetail { id: project.id.to_string() },
                    class: "card-link",
                    "View Project \u{2192}"
                }
            }
        }
    }
}

/// Compact card for the home page's featured section.
#[component]
pub fn FeaturedCard(project: &'static ProjectRecord) -> Element {
    rsx! {
        article {
            class: "card featured-card",

            img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }

            div {
                class: "card-body",
                h3 { "{project.title}" }
                p { class: "card-text clamp", "{project.description}" }
                TechTags { technologies: project.technologies, compact: true }

                div {
                    class: "card-actions",
                    RouteLink {
                        to: Route::ProjectDetail { id: project.id.to_string() },
                        class: "card-link",
                        "Details"
                    }
                    if let Some(live) = project.visible_live_link() {
                        ExternalLink { href: "{live}", class: "card-link", "Live Demo \u{2197}" }
                    }
                }
            }
        }
    }
}

//! Detail page for a single project.

use dioxus::prelude::*;
use portfolio_core::{Catalog, DetailView, ProjectRecord, Route};

use crate::components::{ExternalLink, RouteLink, SectionTitle, TechTags};

#[component]
pub fn ProjectDetailPage(id: String) -> Element {
    match DetailView::for_id(Catalog::builtin(), &id) {
        DetailView::Project(project) => rsx! { ProjectDetail { project } },
        DetailView::Fallback { message, back_label, back_route } => {
            tracing::debug!(%id, "No project for detail route");
            rsx! {
                div {
                    class: "page fallback",
                    h2 { "{message}" }
                    RouteLink { to: back_route, class: "text-link", "{back_label}" }
                }
            }
        }
    }
}

#[component]
fn ProjectDetail(project: &'static ProjectRecord) -> Element {
    rsx! {
        div {
            class: "page project-detail",

            RouteLink { to: Route::Projects, class: "text-link back-link", "\u{2190} Back to Projects" }

            section {
                class: "card detail-hero",

                img { class: "detail-image", src: "{project.image}", alt: "{project.title}" }

                div {
                    class: "detail-summary",
                    div {
                        class: "card-heading",
                        h1 { "{project.title}" }
                        span { class: "badge", "{project.category}" }
                    }
                    p { "{project.description}" }
                    TechTags { technologies: project.technologies }

                    div {
                        class: "detail-actions",
                        if let Some(live) = project.visible_live_link() {
                            ExternalLink { href: "{live}", class: "btn btn-primary", "Live Demo \u{2197}" }
                        }
                        if let Some(github) = project.visible_github_link() {
                            ExternalLink { href: "{github}", class: "btn btn-outline", "View Code" }
                        }
                    }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "Project Overview" }
                p { "{project.long_description}" }
            }

            section {
                class: "card-grid two",
                div {
                    class: "card",
                    h3 { "Key Features" }
                    ul {
                        class: "feature-list",
                        for feature in project.features.iter() {
                            li { "{feature}" }
                        }
                    }
                }
                div {
                    class: "card",
                    h3 { "Challenges Solved" }
                    p { "{project.challenges_solved}" }
                }
            }

            section {
                class: "section centered",
                h2 { "Explore More Projects" }
                RouteLink { to: Route::Projects, class: "btn btn-primary", "View All Projects" }
            }
        }
    }
}

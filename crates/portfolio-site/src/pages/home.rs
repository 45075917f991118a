//! Landing page: hero, services, skills, featured projects.

use dioxus::prelude::*;
use portfolio_core::{Catalog, NavLink, PROFILE, Route};

use crate::components::{FeaturedCard, RouteLink, SectionTitle};

/// Link under the service cards.
const ABOUT_CTA: NavLink = NavLink {
    label: "Learn More About Me",
    path: "/about",
};

#[component]
pub fn HomePage() -> Element {
    let featured: Vec<_> = Catalog::builtin().featured().collect();
    let roles = PROFILE.roles.join(" \u{b7} ");

    rsx! {
        div {
            class: "page home-page",

            section {
                class: "hero",
                h1 {
                    class: "hero-title",
                    "Hi, I'm "
                    span { class: "accent", "{PROFILE.name}" }
                }
                p { class: "hero-roles", "{roles}" }
                p { class: "hero-summary", "{PROFILE.summary}" }
                div {
                    class: "hero-actions",
                    RouteLink { to: Route::Projects, class: "btn btn-primary", "View My Work \u{2192}" }
                    RouteLink { to: Route::Contact, class: "btn btn-outline", "Get In Touch" }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "About Me" }
                p { class: "section-subtitle", "{PROFILE.summary}" }
                div {
                    class: "card-grid three",
                    for service in PROFILE.services.iter() {
                        div {
                            class: "card service-card",
                            h3 { "{service.title}" }
                            p { "{service.summary}" }
                        }
                    }
                }
                div {
                    class: "section-actions",
                    RouteLink { to: Route::parse(ABOUT_CTA.path), class: "btn btn-outline", "{ABOUT_CTA.label} \u{2192}" }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "My Skills" }
                div {
                    class: "skill-grid",
                    for skill in PROFILE.home_skills() {
                        div { class: "skill-chip", "{skill}" }
                    }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "Featured Projects" }
                div {
                    class: "card-grid",
                    for project in featured {
                        FeaturedCard { key: "{project.id}", project }
                    }
                }
                div {
                    class: "section-actions",
                    RouteLink { to: Route::Projects, class: "btn btn-primary", "View All Projects \u{2192}" }
                }
            }

            section {
                class: "cta",
                h2 { "Let's Work Together" }
                p { "Have a project in mind? I'm currently available for freelance work." }
                RouteLink { to: Route::Contact, class: "btn btn-light", "Get In Touch" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core::{NAV_LINKS, NavShell};

    use super::*;

    #[test]
    fn test_about_cta_opens_about_page() {
        assert_eq!(Route::parse(ABOUT_CTA.path), Route::About);

        let mut shell = NavShell::new(Route::Home);
        shell.navigate_to(ABOUT_CTA.path);
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|link| shell.is_active(link.path))
            .map(|link| link.label)
            .collect();
        assert_eq!(active, vec!["About"]);
    }
}

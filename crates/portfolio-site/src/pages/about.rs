//! Biography, skills, experience and education.

use dioxus::prelude::*;
use portfolio_core::{PROFILE, Route};

use crate::components::{PageHeading, RouteLink, SectionTitle};

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        div {
            class: "page about-page",

            PageHeading {
                title: "About Me",
                subtitle: "Get to know more about me, my background, and what drives me as a developer.",
            }

            section {
                class: "section bio",
                div {
                    class: "bio-text",
                    h2 { "My Journey" }
                    for paragraph in PROFILE.bio.iter() {
                        p { "{paragraph}" }
                    }
                }
                div {
                    class: "stat-grid",
                    for stat in PROFILE.stats.iter() {
                        div {
                            class: "stat",
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "My Skills" }
                div {
                    class: "skill-grid",
                    for skill in PROFILE.about_skills().iter() {
                        div { class: "skill-chip", "{skill}" }
                    }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "Professional Experience" }
                div {
                    class: "timeline",
                    for job in PROFILE.experience.iter() {
                        div {
                            class: "card timeline-entry",
                            div {
                                class: "timeline-heading",
                                h3 { "{job.title}" }
                                span { class: "badge", "{job.period}" }
                            }
                            p { class: "timeline-company", "{job.company}" }
                            p { "{job.description}" }
                        }
                    }
                }
            }

            section {
                class: "section",
                SectionTitle { title: "Education & Certifications" }
                div {
                    class: "card-grid two",
                    div {
                        class: "card",
                        h3 { "Education" }
                        for entry in PROFILE.education.iter() {
                            div {
                                class: "education-entry",
                                h4 { "{entry.degree}" }
                                p { class: "muted", "{entry.institution} \u{b7} {entry.period}" }
                                p { "{entry.grade}" }
                            }
                        }
                    }
                    div {
                        class: "card",
                        h3 { "Certifications" }
                        for cert in PROFILE.certifications.iter() {
                            div {
                                class: "education-entry",
                                h4 { "{cert.name}" }
                                p { "{cert.summary}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "section centered",
                h2 { "Featured Projects" }
                p {
                    class: "section-subtitle",
                    "Take a look at some of the projects I've worked on. Each project demonstrates my skills and passion for building exceptional digital experiences."
                }
                RouteLink { to: Route::Projects, class: "btn btn-primary", "View All Projects \u{2192}" }
            }
        }
    }
}

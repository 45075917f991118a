//! Small building blocks shared across pages.

use dioxus::prelude::*;

/// Page title with a short lead paragraph underneath.
#[component]
pub fn PageHeading(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "page-heading",
            h1 { class: "page-title", "{title}" }
            p { class: "page-subtitle", "{subtitle}" }
        }
    }
}

#[component]
pub fn SectionTitle(title: String) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
    }
}

/// Technology badges. Duplicate entries render as separate tags.
#[component]
pub fn TechTags(technologies: &'static [&'static str], #[props(default)] compact: bool) -> Element {
    let class = if compact { "tech-tags compact" } else { "tech-tags" };

    rsx! {
        div {
            class: "{class}",
            for tech in technologies.iter() {
                span { class: "tech-tag", "{tech}" }
            }
        }
    }
}

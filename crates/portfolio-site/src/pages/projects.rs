//! Project listing with category filter.

use dioxus::prelude::*;
use portfolio_core::{Catalog, CategorySelection, ProjectFilterState};

use crate::components::{PageHeading, ProjectCard};

#[component]
pub fn ProjectsPage() -> Element {
    let catalog = Catalog::builtin();
    let mut filter_state = use_signal(ProjectFilterState::new);

    let state = *filter_state.read();
    let visible = state.apply(catalog);
    let summary = state.summary(catalog);
    let chevron = if state.dropdown_open { "chevron open" } else { "chevron" };

    rsx! {
        div {
            class: "page projects-page",

            PageHeading {
                title: "My Projects",
                subtitle: "A showcase of my work in the MERN stack, React Native, and web development.",
            }

            div {
                class: "filter-bar",

                // Narrow layouts get a dropdown instead of tabs
                div {
                    class: "filter-dropdown",
                    button {
                        class: "filter-dropdown-toggle",
                        onclick: move |_| filter_state.write().toggle_dropdown(),
                        span { "Filter: {state.selected}" }
                        span { class: "{chevron}", "\u{25BE}" }
                    }
                    if state.dropdown_open {
                        div {
                            class: "filter-dropdown-menu",
                            for option in CategorySelection::options() {
                                button {
                                    key: "{option}",
                                    class: if state.is_selected(option) { "filter-option selected" } else { "filter-option" },
                                    onclick: move |_| filter_state.write().select(option),
                                    "{option}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "filter-tabs",
                    for option in CategorySelection::options() {
                        button {
                            key: "{option}",
                            class: if state.is_selected(option) { "filter-tab selected" } else { "filter-tab" },
                            onclick: move |_| filter_state.write().select(option),
                            "{option}"
                        }
                    }
                }

                p { class: "filter-summary", "{summary}" }
            }

            div {
                class: "project-grid",
                for project in visible {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

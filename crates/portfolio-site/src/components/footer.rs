//! Site footer: socials, quick links, contact details and copyright.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::{NAV_LINKS, PROFILE, Route};

use super::{ExternalLink, RouteLink};

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let contact = &PROFILE.contact;
    let mailto = PROFILE.mailto();

    rsx! {
        footer {
            class: "site-footer",

            div {
                class: "footer-grid",

                div {
                    class: "footer-about",
                    h3 { "{PROFILE.name}" }
                    p { "{PROFILE.summary}" }
                    div {
                        class: "socials",
                        for social in PROFILE.socials.iter() {
                            ExternalLink {
                                href: "{social.url}",
                                class: "social-link",
                                "{social.label}"
                            }
                        }
                    }
                }

                div {
                    class: "footer-links",
                    h3 { "Quick Links" }
                    ul {
                        for link in NAV_LINKS {
                            li {
                                RouteLink { to: Route::parse(link.path), "{link.label}" }
                            }
                        }
                    }
                }

                div {
                    class: "footer-contact",
                    h3 { "Contact" }
                    ul {
                        li { a { href: "{mailto}", "{contact.email}" } }
                        li { "{contact.location}" }
                        li { "{contact.phone}" }
                    }
                }
            }

            div {
                class: "footer-bottom",
                p { "{PROFILE.copyright(year)}" }
            }
        }
    }
}

//! Contact details and message form.

use dioxus::prelude::*;
use portfolio_core::{ContactForm, PROFILE, SubmitStatus};

use crate::components::{ExternalLink, PageHeading};
use crate::site_config;

#[component]
pub fn ContactPage() -> Element {
    let config = use_hook(site_config);
    let mut form = use_signal(ContactForm::new);
    let current = form.read().clone();
    let contact = &PROFILE.contact;
    let mailto = PROFILE.mailto();

    let status = match current.status() {
        SubmitStatus::Idle => rsx! {},
        SubmitStatus::Sent => rsx! {
            p { class: "form-status success", "Thanks! Your message has been queued." }
        },
        SubmitStatus::Failed(reason) => rsx! {
            p { class: "form-status error", "Could not send: {reason}" }
        },
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut sink = config.contact_sink();
        if let Err(e) = form.write().submit(&mut sink) {
            tracing::warn!(error = %e, "Contact form not sent");
        }
    };

    rsx! {
        div {
            class: "page contact-page",

            PageHeading {
                title: "Get In Touch",
                subtitle: "Have a project in mind or just want to say hello? Send me a message.",
            }

            div {
                class: "card-grid two",

                div {
                    class: "card contact-details",
                    h3 { "Contact Information" }
                    ul {
                        li { a { href: "{mailto}", "{contact.email}" } }
                        li { "{contact.location}" }
                        li { "{contact.phone}" }
                    }
                    div {
                        class: "socials",
                        for social in PROFILE.socials.iter() {
                            ExternalLink { href: "{social.url}", class: "social-link", "{social.label}" }
                        }
                    }
                }

                form {
                    class: "card contact-form",
                    onsubmit,

                    label { "Name" }
                    input {
                        r#type: "text",
                        name: "name",
                        value: "{current.name}",
                        oninput: move |evt| {
                            let mut form = form.write();
                            form.name = evt.value();
                            form.reset_status();
                        },
                    }

                    label { "Email" }
                    input {
                        r#type: "email",
                        name: "email",
                        value: "{current.email}",
                        oninput: move |evt| {
                            let mut form = form.write();
                            form.email = evt.value();
                            form.reset_status();
                        },
                    }

                    label { "Subject" }
                    input {
                        r#type: "text",
                        name: "subject",
                        value: "{current.subject}",
                        oninput: move |evt| {
                            let mut form = form.write();
                            form.subject = evt.value();
                            form.reset_status();
                        },
                    }

                    label { "Message" }
                    textarea {
                        name: "message",
                        rows: "6",
                        value: "{current.message}",
                        oninput: move |evt| {
                            let mut form = form.write();
                            form.message = evt.value();
                            form.reset_status();
                        },
                    }

                    {status}

                    button { r#type: "submit", class: "btn btn-primary", "Send Message" }
                }
            }
        }
    }
}

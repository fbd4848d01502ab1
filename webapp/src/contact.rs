use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::info;

use site::{
    config::{CONTACT_EMAIL, CONTACT_LOCATION},
    contact::{ContactForm, SOCIAL_LINKS},
};

use crate::common::browser::{encode_uri_component, open_url};

#[component]
fn ContactDetails() -> Element {
    rsx! {
        div { class: "contact-details reveal",
            h2 { "Get in touch" }
            p { "Commissions, collaborations or just a hello." }
            ul {
                li {
                    a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                }
                li { "{CONTACT_LOCATION}" }
                for link in SOCIAL_LINKS {
                    li { key: "{link.label}",
                        a {
                            href: link.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn Contact() -> Element {
    let mut form_signal = use_signal(ContactForm::default);
    let mut error_signal = use_signal(|| None::<String>);
    let mut sent_signal = use_signal(|| false);

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();

        let form = form_signal();
        let url = match form.mailto(encode_uri_component) {
            Ok(url) => url,
            Err(err) => {
                error_signal.set(Some(err.to_string()));
                return;
            }
        };

        match open_url(&url) {
            Ok(()) => {
                info!("opened mail client for contact form");
                error_signal.set(None);
                sent_signal.set(true);
            }
            Err(err) => {
                console_error!(format!("Failed to open mail client: {err}"));
                error_signal.set(Some(format!(
                    "Could not open your mail client, please write to {CONTACT_EMAIL} directly"
                )));
            }
        }
    };

    let form = form_signal();
    let name = form.name.trim().to_owned();

    rsx! {
        section { class: "contact-section",
            div { class: "container",
                div { class: "page-header",
                    h1 { class: "reveal", "Contact" }
                    p { class: "reveal", style: "animation-delay: 0.1s;",
                        "Tell me about your next project"
                    }
                }

                div { class: "contact-grid",
                    ContactDetails {}

                    if sent_signal() {
                        div { class: "form-sent reveal",
                            h3 { "Thank you, {name}" }
                            p { "Your mail client should now have the message ready to send." }
                            button {
                                class: "btn btn-outline",
                                style: "margin-top: 1.5rem;",
                                onclick: move |_| {
                                    form_signal.set(ContactForm::default());
                                    sent_signal.set(false);
                                },
                                "Write another"
                            }
                        }
                    } else {
                        form { class: "contact-form reveal", onsubmit: handle_submit,
                            label {
                                "Name"
                                input {
                                    r#type: "text",
                                    name: "name",
                                    value: "{form.name}",
                                    oninput: move |evt| form_signal.with_mut(|f| f.name = evt.value()),
                                }
                            }
                            label {
                                "Email"
                                input {
                                    r#type: "email",
                                    name: "email",
                                    value: "{form.email}",
                                    oninput: move |evt| form_signal.with_mut(|f| f.email = evt.value()),
                                }
                            }
                            label {
                                "Message"
                                textarea {
                                    name: "message",
                                    value: "{form.message}",
                                    oninput: move |evt| form_signal.with_mut(|f| f.message = evt.value()),
                                }
                            }

                            if let Some(err) = error_signal() {
                                p { class: "form-error", "{err}" }
                            }

                            input {
                                class: "btn btn-primary",
                                r#type: "submit",
                                value: "Send Message",
                            }
                        }
                    }
                }
            }
        }
    }
}

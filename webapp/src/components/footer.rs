use dioxus::prelude::*;

use site::{
    config::{CONTACT_EMAIL, SITE_MARK, SITE_NAME},
    contact::SOCIAL_LINKS,
};

use crate::common::current_year;

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { "© {year} {SITE_NAME} × {SITE_MARK}" }
                p {
                    a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    for link in SOCIAL_LINKS {
                        span { key: "{link.label}",
                            " · "
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
}

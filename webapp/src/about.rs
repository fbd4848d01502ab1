use dioxus::prelude::*;

use site::{
    about::{BIO, PORTRAIT, SKILLS},
    config::{SITE_NAME, stagger_delay},
};

#[component]
pub fn About() -> Element {
    let skills: Vec<(f64, &str)> = SKILLS
        .iter()
        .enumerate()
        .map(|(index, skill)| (stagger_delay(index), *skill))
        .collect();

    rsx! {
        section { class: "about-section",
            div { class: "container",
                div { class: "about-grid",
                    div { class: "about-content reveal",
                        h1 { "About Michael Andrade" }
                        for paragraph in BIO {
                            p { "{paragraph}" }
                        }

                        div { class: "skills",
                            h3 { "Expertise" }
                            div { class: "skills-list",
                                for (delay , skill) in skills.iter() {
                                    span {
                                        key: "{skill}",
                                        class: "skill reveal",
                                        style: "animation-delay: {delay}s;",
                                        "{skill}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "about-image reveal",
                        img { src: PORTRAIT, alt: SITE_NAME }
                    }
                }
            }
        }
    }
}

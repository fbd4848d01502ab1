use dioxus::prelude::*;

use site::{config::stagger_delay, project::PROJECTS};

use crate::{Route, components::transition::TransitionLink, portfolio::card::ProjectCard};

const FEATURED_COUNT: usize = 3;

#[component]
pub fn Home() -> Element {
    rsx! {
        // Hero section
        section { class: "hero",
            div { class: "hero-backdrop" }
            div { class: "container",
                div { class: "hero-content",
                    h1 { class: "hero-title reveal", "Cinematic Storytelling" }
                    p {
                        class: "hero-subtitle reveal",
                        style: "animation-delay: 0.3s;",
                        "Creative Direction × Visual Narratives × Digital Experiences"
                    }
                    div { class: "reveal", style: "animation-delay: 0.6s;",
                        TransitionLink { to: Route::Portfolio {}, class: "btn btn-primary", "View Portfolio" }
                    }
                }
            }
            div { class: "scroll-indicator reveal", style: "animation-delay: 1.5s;",
                "Scroll"
            }
        }

        // Featured work
        section { class: "featured",
            div { class: "container",
                h2 { "Selected Work" }
                div { class: "project-grid",
                    for (index , project) in PROJECTS.iter().take(FEATURED_COUNT).enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project_id: project.id,
                            delay: stagger_delay(index),
                        }
                    }
                }
            }
        }
    }
}

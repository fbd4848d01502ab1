use dioxus::prelude::*;

use site::project::{find_project, neighbours};

use crate::{Route, components::transition::TransitionLink, not_found::ProjectNotFound};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectDetailProps {
    // This is a String because we get it from the Router
    id: String,
}

//
// ROUTE TARGET
//
// an id that does not parse, or parses but matches no project, gets the
// project-not-found view rather than a half-rendered page
#[component]
pub fn ProjectDetail(props: ProjectDetailProps) -> Element {
    let project = match find_project(&props.id) {
        Ok(project) => project,
        Err(err) => {
            tracing::warn!("unresolved project route: {err}");
            let message = err.to_string();
            return rsx! {
                ProjectNotFound { message }
            };
        }
    };

    let pager = neighbours(project.id);

    rsx! {
        article { class: "project-detail",
            div { class: "container",
                div { class: "breadcrumb",
                    TransitionLink { to: Route::Portfolio {}, "Portfolio" }
                    span { " / " }
                    span { "{project.title}" }
                }

                span { class: "category-tag", "{project.category}" }
                h1 { class: "reveal", "{project.title}" }
                p { class: "lead reveal", style: "animation-delay: 0.1s;", "{project.description}" }

                img {
                    class: "project-hero-image reveal",
                    style: "animation-delay: 0.2s;",
                    src: project.image,
                    alt: project.title,
                }

                if let Some((prev, next)) = pager {
                    nav { class: "project-pager",
                        TransitionLink {
                            class: "prev",
                            to: Route::ProjectDetail {
                                id: prev.id.to_string(),
                            },
                            small { "Previous" }
                            strong { "{prev.title}" }
                        }
                        TransitionLink {
                            class: "next",
                            to: Route::ProjectDetail {
                                id: next.id.to_string(),
                            },
                            small { "Next" }
                            strong { "{next.title}" }
                        }
                    }
                }
            }
        }
    }
}

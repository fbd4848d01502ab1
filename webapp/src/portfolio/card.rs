use dioxus::prelude::*;

use site::project::{ProjectId, get_project};

use crate::{Route, components::transition::TransitionLink};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project_id: ProjectId,
    // seconds before the card animates in
    #[props(default)]
    delay: f64,
}

// ProjectCard
//
// one tile in a project grid.  the whole card is a link to the detail page,
// with the title and description revealed on hover
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let Some(project) = get_project(props.project_id) else {
        return rsx! {};
    };
    let delay = props.delay;

    rsx! {
        TransitionLink {
            class: "project-card reveal",
            style: "animation-delay: {delay}s;",
            to: Route::ProjectDetail {
                id: project.id.to_string(),
            },
            div { class: "project-image",
                img { src: project.image, alt: project.title }
            }
            div { class: "project-overlay",
                h3 { "{project.title}" }
                p { "{project.description}" }
                span { class: "category-tag", "{project.category}" }
            }
        }
    }
}

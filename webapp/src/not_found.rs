use dioxus::prelude::*;

use crate::{Route, components::transition::TransitionLink};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectNotFoundProps {
    message: String,
}

#[component]
pub fn ProjectNotFound(props: ProjectNotFoundProps) -> Element {
    rsx! {
        div { class: "error-state container",
            h1 { "Project not found" }
            p { "{props.message}" }
            TransitionLink { to: Route::Portfolio {}, class: "btn btn-primary", "Back to Portfolio" }
        }
    }
}

//
// ROUTE TARGET
//
// catch-all for any path the route table does not know
#[derive(Clone, PartialEq, Props)]
pub struct PageNotFoundProps {
    segments: Vec<String>,
}

#[component]
pub fn PageNotFound(props: PageNotFoundProps) -> Element {
    let path = format!("/{}", props.segments.join("/"));
    tracing::warn!("no route for {path}");

    rsx! {
        div { class: "error-state container",
            h1 { "Page not found" }
            p { "There is nothing at {path}." }
            TransitionLink { to: Route::Home {}, class: "btn btn-primary", "Go Home" }
        }
    }
}

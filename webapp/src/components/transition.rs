use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;

use site::{
    config::{ENTER_DURATION_MS, EXIT_DURATION_MS},
    transition::Transition,
};

use crate::{Route, common::browser::scroll_to_top};

pub static TRANSITION: GlobalSignal<Transition> = Signal::global(Transition::new);

#[derive(Clone, PartialEq, Props)]
pub struct TransitionLinkProps {
    to: Route,
    #[props(default, into)]
    class: String,
    #[props(default, into)]
    style: String,
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

// TransitionLink
//
// an internal link that fades the current page out before asking the router
// for the next one.  a click on the page that is already showing only runs
// the onclick handler
#[component]
pub fn TransitionLink(props: TransitionLinkProps) -> Element {
    let current: Route = use_route();
    let navigator = use_navigator();

    let target = props.to.clone();
    let href = target.to_string();
    let onclick = props.onclick;

    rsx! {
        a {
            class: props.class,
            style: props.style,
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();

                if let Some(handler) = onclick {
                    handler.call(evt.clone());
                }

                if target == current {
                    return;
                }

                let generation = TRANSITION.write().begin_exit();
                let target = target.clone();

                let exit = Timeout::new(EXIT_DURATION_MS, move || {
                    if TRANSITION.write().exit_finished(generation) {
                        navigator.push(target);
                    }
                });
                exit.forget();
            },
            {props.children}
        }
    }
}

//
// LAYOUT
//
// wraps every page.  the exit half of the animation is started by
// TransitionLink; this side plays the enter half once the router has swapped
// pages, whether the swap came from a link or from history.  the first render
// is left alone so a fresh page load does not animate twice
#[component]
pub fn PageTransition() -> Element {
    let route: Route = use_route();
    let path = route.to_string();

    let mut first_render = use_signal(|| true);

    use_effect(use_reactive(&path, move |path| {
        if *first_render.peek() {
            first_render.set(false);
            return;
        }

        tracing::debug!(path = %path, "route changed");
        scroll_to_top();

        let generation = TRANSITION.write().route_changed();

        let enter = Timeout::new(ENTER_DURATION_MS, move || {
            TRANSITION.write().enter_finished(generation);
        });
        enter.forget();
    }));

    let class = TRANSITION.read().phase().class();

    rsx! {
        div { class, Outlet::<Route> {} }
    }
}

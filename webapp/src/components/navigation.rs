use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    config::{SITE_MARK, SITE_NAME},
    nav::{NAV_ITEMS, NavItem, NavState, is_active},
    routes,
};

use crate::{
    Route,
    common::browser::use_scroll_offset,
    components::{footer::Footer, transition::TransitionLink},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    item: NavItem,
    current_path: String,
    nav_signal: Signal<NavState>,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let item = props.item;
    let mut nav_signal = props.nav_signal;

    let Ok(target) = item.path.parse::<Route>() else {
        tracing::error!("nav item {} does not match any route", item.path);
        return rsx! {};
    };

    rsx! {
        TransitionLink {
            class: if is_active(item.path, &props.current_path) { "nav-link active" } else { "nav-link" },
            to: target,
            onclick: move |_| nav_signal.with_mut(|nav| nav.close_menu()),
            "{item.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarInnerProps {
    nav_signal: Signal<NavState>,
}

#[component]
fn NavBarInner(props: NavBarInnerProps) -> Element {
    let mut nav_signal = props.nav_signal;
    let nav = nav_signal();
    let glyph = nav.menu_glyph();

    let route: Route = use_route();
    let current_path = routes::normalize(&route.to_string()).to_owned();

    rsx! {
        nav { class: if nav.scrolled { "site-nav scrolled" } else { "site-nav" },
            div { class: "container",
                div { class: "nav-container",
                    TransitionLink {
                        class: "logo",
                        to: Route::Home {},
                        onclick: move |_| nav_signal.with_mut(|nav| nav.close_menu()),
                        "{SITE_NAME} "
                        span { "×" }
                        " {SITE_MARK}"
                    }

                    div { class: "nav-links",
                        for item in NAV_ITEMS {
                            NavBarLink {
                                key: "{item.path}",
                                item,
                                current_path: current_path.clone(),
                                nav_signal,
                            }
                        }
                    }

                    button {
                        class: "menu-button",
                        "aria-label": "Toggle menu",
                        onclick: move |_| nav_signal.with_mut(|nav| nav.toggle_menu()),
                        "{glyph}"
                    }
                }
            }
        }

        if nav.mobile_menu_open {
            div { class: "mobile-menu",
                for item in NAV_ITEMS {
                    NavBarLink {
                        key: "{item.path}",
                        item,
                        current_path: current_path.clone(),
                        nav_signal,
                    }
                }
            }
        }
    }
}

//
// LAYOUT
//
// the scroll subscription belongs to this component: it is taken when the
// layout mounts and released when it unmounts
#[component]
pub fn NavBar() -> Element {
    let mut nav_signal = use_signal(NavState::new);
    let scroll_offset = use_scroll_offset();

    use_effect(move || {
        let offset = scroll_offset();
        nav_signal.with_mut(|nav| nav.on_scroll(offset));
    });

    rsx! {
        NavBarInner { nav_signal }
        main { Outlet::<Route> {} }
        Footer {}
    }
}

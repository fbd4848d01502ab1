#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::{navigation::NavBar, transition::PageTransition};

mod home;
use home::Home;

mod about;
use about::About;

mod portfolio;
use portfolio::{Portfolio, ProjectDetail};

mod contact;
use contact::Contact;

mod not_found;
use not_found::PageNotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the nav bar sits outside the transition layout so it stays put while the
// page underneath it animates
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[layout(PageTransition)]
            #[route("/")]
            Home {},
            #[route("/about")]
            About {},
            #[route("/portfolio")]
            Portfolio {},
            #[route("/portfolio/:id")]
            ProjectDetail { id: String },
            #[route("/contact")]
            Contact {},
            #[route("/:..segments")]
            PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

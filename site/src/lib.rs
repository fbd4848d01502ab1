// everything in this crate is plain data and state that the webapp drives
// from its components.  nothing here touches the browser, so the logic can
// be tested natively with `cargo test -p site`

pub mod about;
pub mod config;
pub mod contact;
pub mod nav;
pub mod portfolio;
pub mod project;
pub mod routes;
pub mod transition;

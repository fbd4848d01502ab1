use std::rc::Rc;

use anyhow::Context;
use dioxus::prelude::*;
use gloo_console::error as console_error;
use gloo_events::EventListener;
use tracing::debug;
use web_sys::{Window, window};

fn get_window() -> anyhow::Result<Window> {
    window().context("no global window exists")
}

pub fn scroll_offset() -> f64 {
    get_window()
        .and_then(|w| {
            w.scroll_y()
                .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
        })
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    match get_window() {
        Ok(w) => w.scroll_to_with_x_and_y(0.0, 0.0),
        Err(err) => console_error!(format!("Failed to scroll to top: {err}")),
    }
}

// open_url
//
// hands a url to the browser in the current tab.  for mailto: links this
// opens the mail client without navigating away from the site
pub fn open_url(url: &str) -> anyhow::Result<()> {
    let window = get_window()?;
    window
        .open_with_url_and_target(url, "_self")
        .map_err(|err| anyhow::Error::msg(format!("{err:?}")))?;
    Ok(())
}

pub fn encode_uri_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

// use_scroll_offset
//
// tracks window.scrollY for as long as the calling component is mounted.  the
// listener lives in the hook slot, and dropping an EventListener removes it
// from the window, so unmounting the component always unsubscribes
pub fn use_scroll_offset() -> Signal<f64> {
    let offset = use_signal(scroll_offset);

    use_hook(move || {
        let listener = get_window().map(|w| {
            debug!("subscribing to window scroll");
            let mut offset = offset;
            EventListener::new(&w, "scroll", move |_| offset.set(scroll_offset()))
        });

        if let Err(err) = &listener {
            console_error!(format!("Failed to subscribe to scroll events: {err}"));
        }

        Rc::new(listener.ok())
    });

    use_drop(|| debug!("scroll subscription released"));

    offset
}

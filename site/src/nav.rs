use tracing::debug;

use crate::{config::SCROLL_THRESHOLD, routes};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        path: routes::HOME,
        label: "Home",
    },
    NavItem {
        path: routes::ABOUT,
        label: "About",
    },
    NavItem {
        path: routes::PORTFOLIO,
        label: "Portfolio",
    },
    NavItem {
        path: routes::CONTACT,
        label: "Contact",
    },
];

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

// a link is highlighted only on an exact path match, so the Portfolio entry
// is not active on a project detail page
pub fn is_active(path: &str, current_route: &str) -> bool {
    path == current_route
}

// NavState
//
// the transient state owned by the navigation bar.  the current route is not
// stored here, since it belongs to the router and is only ever read
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "toggled mobile menu");
    }

    // any link activated from the menu closes it
    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn menu_glyph(&self) -> &'static str {
        if self.mobile_menu_open { "✕" } else { "☰" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_strict() {
        for offset in [0.0, 1.0, 25.5, 49.9, 50.0] {
            assert!(!is_scrolled(offset), "{offset} should not be scrolled");
        }
        for offset in [50.01, 51.0, 400.0, 10_000.0] {
            assert!(is_scrolled(offset), "{offset} should be scrolled");
        }
    }

    #[test]
    fn on_scroll_follows_latest_offset() {
        let mut state = NavState::new();
        assert!(!state.scrolled);

        state.on_scroll(120.0);
        assert!(state.scrolled);

        state.on_scroll(50.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn double_toggle_restores_menu() {
        let mut state = NavState::new();
        let before = state.mobile_menu_open;

        state.toggle_menu();
        assert_ne!(state.mobile_menu_open, before);
        assert_eq!(state.menu_glyph(), "✕");

        state.toggle_menu();
        assert_eq!(state.mobile_menu_open, before);
        assert_eq!(state.menu_glyph(), "☰");
    }

    #[test]
    fn link_activation_closes_menu() {
        let mut state = NavState::new();
        state.toggle_menu();
        state.close_menu();
        assert!(!state.mobile_menu_open);

        // closing an already closed menu leaves it closed
        state.close_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn exactly_one_item_is_active_per_nav_route() {
        for current in NAV_ITEMS.iter().map(|item| item.path) {
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|item| is_active(item.path, current))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].path, current);
        }
    }

    #[test]
    fn nothing_active_on_detail_page() {
        assert!(NAV_ITEMS.iter().all(|item| !is_active(item.path, "/portfolio/3")));
    }
}

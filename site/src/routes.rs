// canonical paths of the top-level pages.  the route table itself is the
// Routable enum in the webapp; these are what the nav items point at and
// what the current route is compared against

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const PORTFOLIO: &str = "/portfolio";
pub const CONTACT: &str = "/contact";

// the router may hand back a trailing slash; nav highlighting compares
// against the canonical form
pub fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => HOME,
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NAV_ITEMS;

    #[test]
    fn nav_items_use_route_paths() {
        let paths: Vec<_> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(paths, [HOME, ABOUT, PORTFOLIO, CONTACT]);
    }

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/about/"), "/about");
        assert_eq!(normalize("/portfolio/2"), "/portfolio/2");
    }
}

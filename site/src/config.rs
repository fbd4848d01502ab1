// site-wide constants
//
// there is no runtime configuration: the site is a static bundle, so the
// knobs that would otherwise live in a config file are compiled in here

pub const SITE_NAME: &str = "MICHAEL ANDRADE";
pub const SITE_MARK: &str = "VOID";

pub const CONTACT_EMAIL: &str = "hello@michaelandrade.studio";
pub const CONTACT_LOCATION: &str = "Los Angeles, CA";

// vertical offset, in pixels, past which the navigation bar switches to its
// opaque style.  the comparison is strict, so exactly 50 is still "top"
pub const SCROLL_THRESHOLD: f64 = 50.0;

// page transition timings, in milliseconds
pub const EXIT_DURATION_MS: u32 = 300;
pub const ENTER_DURATION_MS: u32 = 600;

// per-item delay for staggered grid/list animations, in seconds
pub const STAGGER_SECS: f64 = 0.1;

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_starts_at_zero() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(3) - 0.3).abs() < 1e-9);
    }
}

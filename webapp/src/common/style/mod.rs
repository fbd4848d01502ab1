use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use pages::{ABOUT_STYLES, CONTACT_STYLES, HOME_STYLES, PORTFOLIO_STYLES};
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-body);
  color: var(--color-text);
  background-color: var(--color-primary);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

h1, h2, h3 {
  font-family: var(--font-display);
  font-weight: 700;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
    ABOUT_STYLES,
    PORTFOLIO_STYLES,
    CONTACT_STYLES
);

use constcat::concat;

mod components;
mod variables;

pub use components::{CONTACT_STYLES, NAV_STYLES, SECTION_STYLES};
pub use variables::CSS_VARIABLES;

pub const PAGE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: auto;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition), color var(--transition);
}

a {
  color: var(--primary);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    NAV_STYLES,
    SECTION_STYLES,
    CONTACT_STYLES
);

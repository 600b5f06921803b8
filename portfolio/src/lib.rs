pub mod config;
pub mod debounce;
pub mod menu;
pub mod scroll;
pub mod storage;
pub mod submission;
pub mod theme;

// element identifiers and selectors shared between the rendered document and the
// bindings that look them up again after mount
pub mod ids {
    pub const NAV: &str = "nav";
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const NAV_MENU: &str = "navMenu";
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const BACK_TO_TOP: &str = "backToTop";
    pub const CONTACT_FORM: &str = "contactForm";
    pub const FORM_STATUS: &str = "formStatus";
    pub const HIDDEN_FRAME: &str = "hiddenFrame";
    pub const HIDDEN_FRAME_NAME: &str = "hidden_iframe";

    pub const NAV_LINKS: &str = ".nav-link";
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
    pub const SECTIONS: &str = "section[id]";
    pub const MENU_FOCUSABLE: &str = "a, button";
}

// style classes toggled by the bindings
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const VISIBLE: &str = "visible";
    pub const REVEAL_PENDING: &str = "reveal-pending";
    pub const REVEALED: &str = "revealed";
}

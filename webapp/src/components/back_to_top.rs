use dioxus::prelude::*;

use portfolio::ids;

// a plain anchor, so the smooth scroll binding handles it like any other
#[component]
pub fn BackToTop() -> Element {
    rsx! {
        a {
            id: ids::BACK_TO_TOP,
            class: "back-to-top btn btn-primary",
            href: "#home",
            "aria-label": "Back to top",
            "\u{2191}"
        }
    }
}

use dioxus::prelude::*;

use portfolio::ids;

use crate::content::{NAV_ENTRIES, OWNER};

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    label: String,
    target: String,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let label = props.label;
    let target = props.target;

    rsx! {
        li {
            a { class: "nav-link", href: "#{target}", "{label}" }
        }
    }
}

// the theme toggle sits inside the menu panel so it is part of the tab cycle
// while the menu is open on small screens
#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { id: ids::NAV, class: "nav",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "{OWNER}" }

                ul { id: ids::NAV_MENU, class: "nav-menu",
                    for entry in NAV_ENTRIES {
                        NavBarLink {
                            key: "{entry.target}",
                            label: entry.label.to_owned(),
                            target: entry.target.to_owned(),
                        }
                    }
                    li {
                        button {
                            id: ids::THEME_TOGGLE,
                            class: "theme-toggle",
                            r#type: "button",
                            title: "Toggle theme",
                            "aria-label": "Toggle theme",
                            "\u{25D0}"
                        }
                    }
                }

                button {
                    id: ids::NAV_TOGGLE,
                    class: "nav-toggle",
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-controls": ids::NAV_MENU,
                    "aria-expanded": "false",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::content::{ABOUT, EXPERIENCE, OWNER, PROJECTS, SKILLS, TAGLINE};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            h1 { class: "hero-title", "{OWNER}" }
            p { class: "hero-subtitle", "{TAGLINE}" }
            a { class: "btn btn-primary", href: "#projects", "See my work" }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about",
            h2 { class: "section-title", "About" }
            p { "{ABOUT}" }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "card-grid",
                for skill in SKILLS {
                    div { key: "{skill}", class: "skill-item", "{skill}" }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "card-grid",
                for project in PROJECTS {
                    article { key: "{project.name}", class: "project-card",
                        h3 { "{project.name}" }
                        p { "{project.summary}" }
                        a { href: project.link, "target": "_blank", "rel": "noopener", "View project" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience",
            h2 { class: "section-title", "Experience" }
            div { class: "timeline",
                for role in EXPERIENCE {
                    div { key: "{role.period}", class: "timeline-item",
                        span { class: "timeline-period", "{role.period}" }
                        h3 { "{role.title}" }
                        p { "{role.detail}" }
                    }
                }
            }
        }
    }
}

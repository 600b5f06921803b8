use dioxus::prelude::*;

use portfolio::{config::UiConfig, ids};

use crate::content::CONTACT_CARDS;

// the form posts into a hidden frame so the page never navigates away; the ui
// context watches that frame's load event to learn the post finished
#[component]
pub fn Contact() -> Element {
    let config = use_context::<UiConfig>();

    rsx! {
        section { id: "contact",
            h2 { class: "section-title", "Contact" }

            div { class: "card-grid",
                for card in CONTACT_CARDS {
                    a { key: "{card.label}", class: "contact-card", href: card.href,
                        h3 { "{card.label}" }
                        p { "{card.value}" }
                    }
                }
            }

            form {
                id: ids::CONTACT_FORM,
                class: "contact-form",
                action: config.form_action.clone(),
                method: "POST",
                "target": ids::HIDDEN_FRAME_NAME,
                input { r#type: "text", name: "name", placeholder: "Your name", required: true }
                input { r#type: "email", name: "email", placeholder: "Your email", required: true }
                textarea { name: "message", rows: "5", placeholder: "Your message", required: true }
                button { class: "btn btn-primary", r#type: "submit", "Send message" }
                p { id: ids::FORM_STATUS, class: "form-status", "aria-live": "polite" }
            }

            iframe {
                id: ids::HIDDEN_FRAME,
                "name": ids::HIDDEN_FRAME_NAME,
                title: "form submission target",
                style: "display: none;",
            }
        }
    }
}

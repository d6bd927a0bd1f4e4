use dioxus::prelude::*;

use crate::components::icons::{ChevronDownIcon, ExternalLinkIcon};
use crate::content;
use crate::hooks::use_nav_state::Nav;
use crate::types::SectionId;

#[component]
pub fn Hero() -> Element {
    let mut nav = use_context::<Nav>();

    rsx! {
        section { id: SectionId::Home.anchor_id(), class: "hero",
            div { class: "hero-backdrop" }
            div { class: "hero-content",
                h1 { class: "hero-title", "{content::OWNER_NAME}" }
                p { class: "hero-tagline", "{content::TAGLINE}" }
                div { class: "hero-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| nav.scroll_to(SectionId::Projects),
                        "View Projects"
                        ExternalLinkIcon {}
                    }
                    button {
                        class: "btn-outline",
                        onclick: move |_| nav.scroll_to(SectionId::Contact),
                        "Get in Touch"
                    }
                }
            }
            div { class: "hero-scroll-hint",
                ChevronDownIcon {}
            }
        }
    }
}

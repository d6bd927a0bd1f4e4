use dioxus::prelude::*;

use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon};
use crate::components::sections::SectionHeading;
use crate::content;
use crate::types::SectionId;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            id: SectionId::Contact.anchor_id(),
            class: "section section-tinted",
            div { class: "section-inner section-inner-narrow contact",
                SectionHeading {
                    title: "Get In Touch",
                    subtitle: "I'm always interested in discussing new opportunities, collaborations, or just chatting about ML and AI.".to_string(),
                }

                div { class: "contact-links",
                    a {
                        class: "contact-link contact-link-mail",
                        href: "mailto:{content::CONTACT_EMAIL}",
                        aria_label: "Send email",
                        MailIcon {}
                        "{content::CONTACT_EMAIL}"
                    }
                    a {
                        class: "contact-link contact-link-linkedin",
                        href: content::LINKEDIN_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "Visit LinkedIn profile",
                        LinkedinIcon {}
                        "LinkedIn"
                    }
                    a {
                        class: "contact-link contact-link-github",
                        href: content::GITHUB_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "Visit GitHub profile",
                        GithubIcon {}
                        "GitHub"
                    }
                }
            }
        }
    }
}

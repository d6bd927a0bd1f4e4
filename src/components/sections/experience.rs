use dioxus::prelude::*;

use crate::components::sections::SectionHeading;
use crate::content;
use crate::types::SectionId;

#[component]
pub fn ExperienceTimeline() -> Element {
    let entries = content::experience();

    rsx! {
        section { id: SectionId::Experience.anchor_id(), class: "section",
            div { class: "section-inner section-inner-narrow",
                SectionHeading {
                    title: "Experience",
                    subtitle: "My professional journey in machine learning and data science.".to_string(),
                }

                div { class: "timeline",
                    for entry in entries {
                        div { key: "{entry.company}", class: "timeline-card",
                            div { class: "timeline-header",
                                div {
                                    h3 { "{entry.title}" }
                                    p { class: "timeline-company", "{entry.company}" }
                                }
                                span { class: "timeline-period", "{entry.period}" }
                            }
                            p { class: "timeline-description", "{entry.description}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::icons::{BrainIcon, DatabaseIcon, TrendingUpIcon};
use crate::components::sections::SectionHeading;
use crate::content;
use crate::types::SectionId;

#[component]
pub fn About() -> Element {
    let skill_groups = content::skill_groups();

    rsx! {
        section { id: SectionId::About.anchor_id(), class: "section",
            div { class: "section-inner",
                SectionHeading {
                    title: "About Me",
                    subtitle: content::ABOUT_BLURB.to_string(),
                }

                div { class: "about-grid",
                    div { class: "about-highlights",
                        Highlight {
                            accent: "purple",
                            title: "Machine Learning Expertise",
                            detail: "Deep learning, computer vision, NLP, and reinforcement learning",
                            icon: rsx! { BrainIcon {} },
                        }
                        Highlight {
                            accent: "green",
                            title: "Data Engineering",
                            detail: "Building robust data pipelines and scalable ML infrastructure",
                            icon: rsx! { DatabaseIcon {} },
                        }
                        Highlight {
                            accent: "blue",
                            title: "MLOps & Production",
                            detail: "Deploying and monitoring ML models at scale",
                            icon: rsx! { TrendingUpIcon {} },
                        }
                    }

                    div { class: "skill-grid",
                        for group in skill_groups {
                            div { key: "{group.category}", class: "skill-card",
                                h3 { "{group.category}" }
                                div { class: "skill-items",
                                    for item in group.items {
                                        div { key: "{item}", class: "skill-pill", "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Highlight(accent: String, title: String, detail: String, icon: Element) -> Element {
    rsx! {
        div { class: "highlight-row",
            div { class: "highlight-icon highlight-icon-{accent}", {icon} }
            div {
                h3 { "{title}" }
                p { "{detail}" }
            }
        }
    }
}

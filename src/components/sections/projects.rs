use dioxus::prelude::*;

use crate::components::icons::{ExternalLinkIcon, GithubIcon};
use crate::components::sections::SectionHeading;
use crate::content;
use crate::dom;
use crate::types::SectionId;

#[component]
pub fn ProjectGallery() -> Element {
    let projects = content::projects();

    rsx! {
        section {
            id: SectionId::Projects.anchor_id(),
            class: "section section-tinted",
            div { class: "section-inner",
                SectionHeading {
                    title: "Featured Projects",
                    subtitle: "A showcase of my machine learning projects, from research to production deployments.".to_string(),
                }

                div { class: "project-grid",
                    for project in projects {
                        div { key: "{project.title}", class: "project-card",
                            img {
                                class: "project-image",
                                src: "{project.image}",
                                alt: "{project.title}",
                                loading: "lazy",
                            }
                            div { class: "project-body",
                                h3 { "{project.title}" }
                                p { class: "project-description", "{project.description}" }
                                div { class: "tech-tags",
                                    for tech in &project.tech {
                                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                                    }
                                }
                                div { class: "project-links",
                                    button {
                                        class: "btn-link",
                                        aria_label: "View {project.title} source code",
                                        onclick: {
                                            let url = project.github.clone();
                                            move |_| dom::open_external(&url)
                                        },
                                        GithubIcon {}
                                        span { "Code" }
                                    }
                                    button {
                                        class: "btn-link",
                                        aria_label: "View {project.title} demo",
                                        onclick: {
                                            let url = project.demo.clone();
                                            move |_| dom::open_external(&url)
                                        },
                                        ExternalLinkIcon {}
                                        span { "Demo" }
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

use dioxus::prelude::*;

/// The centered heading + optional subtitle every section opens with.
#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { "{title}" }
            {subtitle.as_ref().map(|subtitle| rsx! {
                p { class: "section-subtitle", "{subtitle}" }
            })}
        }
    }
}

use dioxus::prelude::*;

use crate::components::navigation::Navbar;
use crate::components::sections::{About, Contact, ExperienceTimeline, Hero, ProjectGallery};
use crate::hooks::{use_nav, use_scroll_listener};

/// Top-level page layout. Owns the navigation state, shares it with every
/// child through context, and holds the window scroll subscription for as
/// long as the page is mounted.
#[component]
pub fn PortfolioLayout() -> Element {
    let nav = use_nav();
    use_context_provider(|| nav);
    use_scroll_listener(nav);

    rsx! {
        div { class: "page",
            Navbar {}
            Hero {}
            About {}
            ProjectGallery {}
            ExperienceTimeline {}
            Contact {}
            footer { class: "footer",
                p { "© 2025 ML Engineer Portfolio. Built with Rust, Dioxus & WebAssembly." }
            }
        }
    }
}

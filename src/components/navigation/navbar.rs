use dioxus::prelude::*;

use crate::components::icons::{BrainIcon, MenuIcon, XIcon};
use crate::hooks::use_nav_state::Nav;
use crate::types::SectionId;

/// Fixed top navigation. Desktop gets the full link row; on small screens
/// the row collapses behind the toggle button and the menu renders below.
#[component]
pub fn Navbar() -> Element {
    let mut nav = use_context::<Nav>();

    rsx! {
        nav {
            class: if nav.scrolled() { "navbar navbar-scrolled" } else { "navbar" },

            div { class: "navbar-inner",
                div { class: "navbar-brand",
                    BrainIcon {}
                }

                div { class: "navbar-links",
                    for section in SectionId::ALL {
                        button {
                            key: "{section.anchor_id()}",
                            class: if nav.active_section() == section {
                                "nav-link nav-link-active"
                            } else {
                                "nav-link"
                            },
                            onclick: move |_| nav.scroll_to(section),
                            "{section.label()}"
                        }
                    }
                }

                button {
                    class: "navbar-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| nav.toggle_menu(),
                    if nav.menu_open() {
                        XIcon {}
                    } else {
                        MenuIcon {}
                    }
                }
            }

            if nav.menu_open() {
                div { class: "navbar-mobile-menu",
                    for section in SectionId::ALL {
                        button {
                            key: "{section.anchor_id()}",
                            class: "nav-link nav-link-mobile",
                            onclick: move |_| nav.scroll_to(section),
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}

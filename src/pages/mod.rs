use dioxus::prelude::*;

use crate::components::layout::PortfolioLayout;

#[component]
pub fn Home() -> Element {
    rsx! {
        PortfolioLayout {}
    }
}

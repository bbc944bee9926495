use dioxus::prelude::*;

use crate::tasks::nback::NBackView;

#[component]
pub fn NBack() -> Element {
    rsx! {
        section { class: "page page-nback",
            h1 { "Visual-Spatial N-Back" }
            p { "Remember where each letter appeared. Press SPACE only when both the letter and the position repeat." }
            NBackView {}
        }
    }
}

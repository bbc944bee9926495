use dioxus::prelude::*;

use crate::tasks::alien::AlienView;

#[component]
pub fn Alien() -> Element {
    rsx! {
        section { class: "page page-alien",
            h1 { "Alien Defense" }
            p { "A one-minute go/no-go drill. The aliens speed up every five seconds." }
            AlienView {}
        }
    }
}

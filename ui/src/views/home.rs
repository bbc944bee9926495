use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "FocusGrid" }
            p { "Two short attention games that run entirely on this computer." }

            ul { class: "page-home__features",
                li {
                    strong { "Visual-Spatial N-Back. " }
                    "Watch letters appear on a 3×3 grid and press SPACE when the letter and its position both match the one from N trials ago."
                }
                li {
                    strong { "Alien Defense. " }
                    "Click the red aliens before they escape and hold fire on the green ones."
                }
                li { "Every response is appended to a CSV file in your data folder for later review." }
            }
            p { class: "page-home__cta", "Pick a game from the bar above to begin." }
        }
    }
}

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` so `ui` can render navigation links without
/// knowing each platform's `Route` enum.
///
/// Each function receives the label and must return a `Link` (or anything styled
/// as `navbar__link`) containing exactly that label.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     nback: |label| rsx!( Link { class: "navbar__link", to: Route::NBack {}, "{label}" } ),
///     alien: |label| rsx!( Link { class: "navbar__link", to: Route::Alien {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub nback: fn(label: &str) -> Element,
    pub alien: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins; later calls (re-renders of the root) are ignored.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let links = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Home");
        let nback = (b.nback)("N-Back");
        let alien = (b.alien)("Alien Defense");
        rsx! {
            nav { class: "navbar__links",
                {home}
                {nback}
                {alien}
            }
        }
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "FocusGrid" }
                    }
                    span { class: "navbar__brand-subtitle", "attention drills" }
                }

                if let Some(nav) = links {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}

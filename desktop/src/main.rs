#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::audio::SoundCue;
use ui::views::{Alien, ExitHandler, Home, NBack};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/game/nback")]
    NBack {},
    #[route("/game/alien")]
    Alien {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme embedded at compile time; desktop ships no separate stylesheet.

const LASER_SOUND: &str = "laser.wav";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let resource_dir = resolve_resource_dir();
    tracing::info!(
        platform = %ui::core::platform::platform_string(),
        resources = %resource_dir.display(),
        "starting FocusGrid"
    );

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("FocusGrid – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1100.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_nback(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::NBack {}, "{label}" })
}
fn nav_alien(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Alien {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        nback: nav_nback,
        alien: nav_alien,
    });

    let window = dioxus::desktop::use_window();
    use_context_provider(move || {
        ExitHandler(EventHandler::new(move |_: ()| {
            tracing::info!("closing window on player request");
            window.close();
        }))
    });
    use_context_provider(|| SoundCue::resolve(&resolve_resource_dir(), LASER_SOUND));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> { }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop-specific layout so the shared navbar sits above this crate's `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}

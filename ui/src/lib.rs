//! Shared UI crate for FocusGrid. Task engines, logging and views live here.

pub mod core;
pub mod tasks;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

use dioxus::prelude::*;

mod alien;
pub use alien::Alien;

mod home;
pub use home::Home;

mod nback;
pub use nback::NBack;

/// Installed by the platform shell; task views call it when the player asks to quit.
#[derive(Clone, Copy)]
pub struct ExitHandler(pub EventHandler<()>);

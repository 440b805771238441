//! Elm-style TUI runtime and the apps built on it.

pub mod app;
pub mod apps;
pub mod command;
pub mod runtime;
pub mod subscription;
pub mod widgets;

pub use app::App;
pub use command::Command;
pub use runtime::Runtime;
pub use subscription::Subscription;
pub use widgets::{TextInputEvent, TextInputState};

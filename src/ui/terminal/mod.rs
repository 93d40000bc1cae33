//! The full-screen crossterm front end.
mod controller;
mod events;
mod keys;
mod lifecycle;
mod palette;
mod render;

pub use controller::TerminalUI;
pub use palette::style_color;

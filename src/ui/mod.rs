//! Terminal front end for the interaction engine.
mod event;
mod log_entry;
mod mode;
pub mod runner;
mod screen;
mod state;
pub mod terminal;

pub use event::UIEvent;
pub use log_entry::LogEntry;
pub use mode::UIMode;
pub use runner::run_tui;
pub use screen::ScreenLog;
pub use state::UIState;
pub use terminal::TerminalUI;

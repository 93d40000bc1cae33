use crossterm::event::KeyEvent;

use super::log_entry::LogEntry;

/// Everything the UI loop reacts to.
#[derive(Debug)]
pub enum UIEvent {
    KeyPress(KeyEvent),
    Resize(u16, u16),
    /// A mouse click anywhere in the window.
    Click,
    FocusGained,
    FocusLost,
    NewLogBatch(Vec<LogEntry>),
    RefreshLogs,
}

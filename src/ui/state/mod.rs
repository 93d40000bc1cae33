mod logs;

use std::collections::VecDeque;

use tracing::Level;

use super::{log_entry::LogEntry, mode::UIMode};

#[derive(Debug)]
pub struct UIState {
    pub mode: UIMode,
    /// Level the log view reopens with.
    pub last_log_level: Level,
    pub logs: VecDeque<LogEntry>,
    pub log_scroll_offset: usize,
    pub is_at_bottom_log: bool,
    pub terminal_size: (u16, u16),
    pub max_log_entries: usize,
    /// Whether the input field has focus. The cursor is hidden otherwise.
    pub focused: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            mode: UIMode::default(),
            last_log_level: Level::DEBUG,
            logs: VecDeque::with_capacity(1000),
            log_scroll_offset: 0,
            is_at_bottom_log: true,
            terminal_size: (80, 24),
            max_log_entries: 1000,
            focused: true,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match &self.mode {
            UIMode::Terminal => UIMode::Logs {
                level: self.last_log_level,
            },
            UIMode::Logs { level } => {
                self.last_log_level = *level;
                UIMode::Terminal
            }
        };

        self.log_scroll_offset = 0;
        self.is_at_bottom_log = true;
    }

    /// Rows available to the output area: everything but the status line and
    /// the input line.
    pub fn output_height(&self) -> usize {
        (self.terminal_size.1 as usize).saturating_sub(2)
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_remembers_log_level() {
        let mut state = UIState::new();
        state.toggle_mode();
        assert_eq!(state.mode, UIMode::Logs { level: Level::DEBUG });

        state.mode = UIMode::Logs { level: Level::WARN };
        state.toggle_mode();
        assert_eq!(state.mode, UIMode::Terminal);
        state.toggle_mode();
        assert_eq!(state.mode, UIMode::Logs { level: Level::WARN });
    }

    #[test]
    fn output_height_leaves_room_for_status_and_input() {
        let mut state = UIState::new();
        state.terminal_size = (80, 30);
        assert_eq!(state.output_height(), 28);
        state.terminal_size = (80, 1);
        assert_eq!(state.output_height(), 0);
    }
}

use tracing::Level;

use crate::ui::{log_entry::LogEntry, mode::UIMode};

use super::UIState;

impl UIState {
    pub fn add_log_batch(&mut self, entries: Vec<LogEntry>) {
        let new_entries_count = entries.len();

        for entry in entries {
            if self.logs.len() >= self.max_log_entries {
                self.logs.pop_front();
            }
            self.logs.push_back(entry);
        }

        if matches!(self.mode, UIMode::Logs { .. }) {
            if self.is_at_bottom_log {
                self.log_scroll_offset = 0;
            } else {
                self.log_scroll_offset = self.log_scroll_offset.saturating_add(new_entries_count);
                self.update_log_scroll_state();
            }
        }
    }

    /// Replaces the log view contents, e.g. after the display level changed.
    pub fn replace_logs(&mut self, entries: Vec<LogEntry>) {
        self.logs.clear();
        let skip = entries.len().saturating_sub(self.max_log_entries);
        self.logs.extend(entries.into_iter().skip(skip));
        self.jump_to_bottom_log();
    }

    pub fn scroll_logs_up(&mut self, lines: usize) {
        self.log_scroll_offset = self.log_scroll_offset.saturating_add(lines);
        self.update_log_scroll_state();
    }

    pub fn scroll_logs_down(&mut self, lines: usize) {
        self.log_scroll_offset = self.log_scroll_offset.saturating_sub(lines);
        self.update_log_scroll_state();
    }

    pub fn update_log_scroll_state(&mut self) {
        let total_logs = self.filtered_logs().len();
        let max_scroll = total_logs.saturating_sub(self.output_height());

        self.log_scroll_offset = self.log_scroll_offset.min(max_scroll);
        self.is_at_bottom_log = self.log_scroll_offset == 0;
    }

    pub fn jump_to_bottom_log(&mut self) {
        self.log_scroll_offset = 0;
        self.is_at_bottom_log = true;
    }

    /// Shows more (`verbose`) or fewer log levels. Returns the new level, or
    /// `None` outside the log view.
    pub fn shift_log_level(&mut self, verbose: bool) -> Option<Level> {
        let UIMode::Logs { level } = &mut self.mode else {
            return None;
        };
        const LEVELS: [Level; 5] = [
            Level::ERROR,
            Level::WARN,
            Level::INFO,
            Level::DEBUG,
            Level::TRACE,
        ];
        let index = LEVELS.iter().position(|l| *l == *level).unwrap_or(3);
        let next = if verbose {
            (index + 1).min(LEVELS.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        *level = LEVELS[next];
        Some(*level)
    }

    pub fn filtered_logs(&self) -> Vec<&LogEntry> {
        match &self.mode {
            UIMode::Logs { level } => self
                .logs
                .iter()
                .filter(|entry| entry.level <= *level)
                .collect(),
            UIMode::Terminal => self.logs.iter().collect(),
        }
    }
}

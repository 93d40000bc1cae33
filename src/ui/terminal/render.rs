use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::markup::Style;
use crate::ui::UIMode;

use super::palette::{level_color, style_color};
use super::TerminalUI;

const PROMPT: &str = "$ ";

impl TerminalUI {
    pub(super) fn render(&mut self) -> Result<()> {
        let mut stdout = stdout();

        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.state.terminal_size;
        if height < 2 || width == 0 {
            stdout.flush()?;
            return Ok(());
        }
        let output_height = height - 2;
        let status_line_row = output_height;
        let input_row = status_line_row + 1;

        match &self.state.mode {
            UIMode::Terminal => self.render_screen(&mut stdout, width, output_height)?,
            UIMode::Logs { .. } => self.render_logs(&mut stdout, width, output_height)?,
        }

        self.render_status_line(&mut stdout, status_line_row, width)?;
        self.render_input_line(&mut stdout, input_row, width)?;

        stdout.flush()?;
        Ok(())
    }

    fn render_screen(&self, stdout: &mut impl Write, width: u16, height: u16) -> Result<()> {
        let rows = self
            .engine
            .renderer()
            .visible_rows(width as usize, height as usize);

        for (line_idx, row) in rows.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, line_idx as u16))?;
            for segment in row {
                match segment.style {
                    Some(Style::Link) => queue!(
                        stdout,
                        SetForegroundColor(style_color(Style::Link)),
                        SetAttribute(Attribute::Underlined),
                        Print(&segment.text),
                        SetAttribute(Attribute::NoUnderline),
                        ResetColor
                    )?,
                    Some(style) => queue!(
                        stdout,
                        SetForegroundColor(style_color(style)),
                        Print(&segment.text),
                        ResetColor
                    )?,
                    None => queue!(stdout, Print(&segment.text))?,
                }
            }
        }

        let scroll_offset = self.engine.renderer().scroll_offset();
        if scroll_offset > 0 {
            let indicator = format!("↑ +{} more", scroll_offset);
            let x = (width as usize).saturating_sub(indicator.width()) as u16;
            queue!(
                stdout,
                cursor::MoveTo(x, 0),
                SetForegroundColor(Color::Yellow),
                Print(indicator),
                ResetColor
            )?;
        }

        Ok(())
    }

    fn render_logs(&self, stdout: &mut impl Write, width: u16, height: u16) -> Result<()> {
        let filtered_logs = self.state.filtered_logs();
        let total_logs = filtered_logs.len();
        let visible_lines = height as usize;

        let end_idx = total_logs.saturating_sub(self.state.log_scroll_offset);
        let start_idx = end_idx.saturating_sub(visible_lines);

        for (line_idx, log_entry) in filtered_logs[start_idx..end_idx].iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, line_idx as u16))?;

            let timestamp = log_entry
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S%.3f");

            let log_line = format!(
                "{} {:5} [{}] {}",
                timestamp,
                log_entry.level.as_str(),
                log_entry.module,
                log_entry.message
            );

            queue!(
                stdout,
                SetForegroundColor(level_color(log_entry.level)),
                Print(truncate(&log_line, width as usize)),
                ResetColor
            )?;
        }

        if self.state.log_scroll_offset > 0 {
            let indicator = format!("↑ +{} more logs", self.state.log_scroll_offset);
            let x = (width as usize).saturating_sub(indicator.width()) as u16;
            queue!(
                stdout,
                cursor::MoveTo(x, 0),
                SetForegroundColor(Color::Yellow),
                Print(indicator),
                ResetColor
            )?;
        }

        Ok(())
    }

    fn render_status_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White)
        )?;

        let status_text = match &self.state.mode {
            UIMode::Terminal => format!(
                " Commands: {} | ↑↓: history | PgUp/PgDn: scroll | F9: logs | Ctrl+C: exit",
                self.engine.table().len()
            ),
            UIMode::Logs { level } => format!(
                " Logs | Level: {} | Entries: {} | +/-: level | F9: terminal",
                level.as_str(),
                self.state.logs.len()
            ),
        };

        let display_text = truncate(&status_text, width as usize);
        let padding = (width as usize).saturating_sub(display_text.width());
        queue!(stdout, Print(&display_text), Print(" ".repeat(padding)), ResetColor)?;
        Ok(())
    }

    fn render_input_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(stdout, cursor::MoveTo(0, row))?;

        if !matches!(self.state.mode, UIMode::Terminal) {
            queue!(stdout, cursor::Hide)?;
            return Ok(());
        }

        queue!(
            stdout,
            SetForegroundColor(style_color(Style::Prompt)),
            Print(PROMPT),
            ResetColor
        )?;

        let input = self.engine.input();
        let available = (width as usize).saturating_sub(PROMPT.width());
        let (visible, cursor_col) = input_window(input.text(), input.cursor(), available);
        queue!(stdout, Print(visible))?;

        if self.state.focused {
            let cursor_x = PROMPT.width() + cursor_col;
            queue!(stdout, cursor::MoveTo(cursor_x as u16, row), cursor::Show)?;
        } else {
            queue!(stdout, cursor::Hide)?;
        }

        Ok(())
    }
}

/// Cuts `text` to `width` columns, marking the cut with "...".
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if width >= 3 {
        out.push_str("...");
    }
    out
}

/// The slice of the input line that fits in `width` columns while keeping the
/// cursor visible, and the cursor's column within it.
fn input_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let col = |c: &char| c.width().unwrap_or(0);

    // Leave one column for the cursor itself.
    let limit = width.saturating_sub(1);
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(col).sum();
    while before > limit && start < cursor {
        before -= col(&chars[start]);
        start += 1;
    }

    let mut used = 0;
    let mut visible = String::new();
    for c in &chars[start..] {
        let w = col(c);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(*c);
    }
    (visible, before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate("status", 10), "status");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn input_fits_without_scrolling() {
        assert_eq!(input_window("help", 4, 20), ("help".to_string(), 4));
        assert_eq!(input_window("help", 1, 20), ("help".to_string(), 1));
    }

    #[test]
    fn input_scrolls_to_keep_cursor_visible() {
        let (visible, col) = input_window("abcdefghij", 10, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn wide_characters_count_two_columns() {
        let (visible, col) = input_window("日本", 2, 10);
        assert_eq!(visible, "日本");
        assert_eq!(col, 4);
    }
}

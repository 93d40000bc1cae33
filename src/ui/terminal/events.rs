use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::ui::{UIEvent, UIMode};

use super::{keys::engine_key, TerminalUI};

const PAGE: usize = 10;

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Result<()> {
        match event {
            UIEvent::NewLogBatch(entries) => {
                self.state.add_log_batch(entries);
            }
            UIEvent::RefreshLogs => {
                if let Some(ref log_buffer) = self.log_buffer {
                    self.state.replace_logs(log_buffer.snapshot());
                }
            }
            UIEvent::KeyPress(key_event) => {
                self.handle_key_event(key_event);
            }
            UIEvent::Resize(width, height) => {
                self.state.terminal_size = (width, height);
            }
            UIEvent::Click | UIEvent::FocusGained => {
                self.state.focused = true;
            }
            UIEvent::FocusLost => {
                self.state.focused = false;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::F(9), _) | (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.toggle_mode();
                return;
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                debug!("Exit requested");
                self.running = false;
                return;
            }
            _ => {}
        }

        match self.state.mode {
            UIMode::Terminal => self.handle_terminal_key(key),
            UIMode::Logs { .. } => self.handle_log_key(key),
        }
    }

    fn toggle_mode(&mut self) {
        self.state.toggle_mode();
        if let (Some(log_buffer), UIMode::Logs { level }) = (&self.log_buffer, &self.state.mode) {
            log_buffer.set_display_level(*level);
        }
    }

    fn handle_terminal_key(&mut self, key: KeyEvent) {
        let width = self.state.terminal_size.0 as usize;
        let height = self.state.output_height();
        match key.code {
            KeyCode::PageUp => {
                self.engine
                    .renderer_mut()
                    .scroll_up(PAGE.min(height.max(1)), width, height);
            }
            KeyCode::PageDown => {
                self.engine.renderer_mut().scroll_down(PAGE.min(height.max(1)));
            }
            KeyCode::Esc => {
                self.engine.renderer_mut().jump_to_bottom();
            }
            _ => {
                if let Some(engine_key) = engine_key(&key) {
                    self.state.focused = true;
                    self.engine.edit(engine_key);
                }
            }
        }
    }

    fn handle_log_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.scroll_logs_up(1),
            KeyCode::Down => self.state.scroll_logs_down(1),
            KeyCode::PageUp => self.state.scroll_logs_up(PAGE),
            KeyCode::PageDown => self.state.scroll_logs_down(PAGE),
            KeyCode::Esc => self.state.jump_to_bottom_log(),
            KeyCode::Char(c @ ('+' | '-')) => {
                if let Some(level) = self.state.shift_log_level(c == '+') {
                    debug!("Log view level set to {:?}", level);
                    if let Some(ref log_buffer) = self.log_buffer {
                        log_buffer.set_display_level(level);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::engine::{BlockKind, Engine, EngineOptions};
    use crate::markup::plain_text;
    use crate::ui::ScreenLog;
    use tokio::sync::mpsc;

    fn ui() -> TerminalUI {
        let engine = Engine::new(&Content::builtin(), ScreenLog::new(), &EngineOptions::default());
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut ui = TerminalUI::new(engine, rx);
        ui.state.terminal_size = (80, 12);
        ui
    }

    fn key(ui: &mut TerminalUI, code: KeyCode) {
        ui.handle_event(UIEvent::KeyPress(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn type_line(ui: &mut TerminalUI, line: &str) {
        for c in line.chars() {
            key(ui, KeyCode::Char(c));
        }
        key(ui, KeyCode::Enter);
    }

    #[test]
    fn typed_command_reaches_engine() {
        let mut ui = ui();
        type_line(&mut ui, "contact");
        let blocks = ui.engine.renderer().blocks();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2].kind, BlockKind::Content);
        assert!(plain_text(&blocks[2].markup).contains("Email"));
    }

    #[test]
    fn arrows_recall_history() {
        let mut ui = ui();
        type_line(&mut ui, "about");
        type_line(&mut ui, "skills");
        key(&mut ui, KeyCode::Up);
        key(&mut ui, KeyCode::Up);
        assert_eq!(ui.engine.input().text(), "about");
        key(&mut ui, KeyCode::Down);
        key(&mut ui, KeyCode::Down);
        assert_eq!(ui.engine.input().text(), "");
    }

    #[test]
    fn ctrl_c_stops_the_loop() {
        let mut ui = ui();
        ui.handle_event(UIEvent::KeyPress(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        assert!(!ui.running);
        assert_eq!(ui.engine.input().text(), "");
    }

    #[test]
    fn focus_follows_window_events() {
        let mut ui = ui();
        ui.handle_event(UIEvent::FocusLost).unwrap();
        assert!(!ui.state.focused);
        ui.handle_event(UIEvent::Click).unwrap();
        assert!(ui.state.focused);
        ui.handle_event(UIEvent::FocusLost).unwrap();
        ui.handle_event(UIEvent::FocusGained).unwrap();
        assert!(ui.state.focused);
    }

    #[test]
    fn page_keys_scroll_output_and_enter_reveals() {
        let mut ui = ui();
        type_line(&mut ui, "projects");
        key(&mut ui, KeyCode::PageUp);
        assert!(!ui.engine.renderer().is_at_bottom());
        type_line(&mut ui, "about");
        assert!(ui.engine.renderer().is_at_bottom());
    }

    #[test]
    fn log_view_swallows_typing() {
        let mut ui = ui();
        key(&mut ui, KeyCode::F(9));
        assert!(matches!(ui.state.mode, UIMode::Logs { .. }));
        type_line(&mut ui, "about");
        assert_eq!(ui.engine.history().len(), 0);
        key(&mut ui, KeyCode::F(9));
        assert_eq!(ui.state.mode, UIMode::Terminal);
    }

    #[test]
    fn resize_updates_size() {
        let mut ui = ui();
        ui.handle_event(UIEvent::Resize(120, 40)).unwrap();
        assert_eq!(ui.state.terminal_size, (120, 40));
    }
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, MouseEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{ScreenLog, TerminalUI, UIEvent};
use crate::engine::Engine;
use crate::logging::LogBuffer;

/// Runs the full-screen terminal until the user exits.
pub async fn run_tui(engine: Engine<ScreenLog>, log_buffer: Arc<LogBuffer>) -> Result<()> {
    info!("Starting terminal UI");

    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();

    log_buffer.set_ui_sender(ui_event_tx.clone());

    let mut terminal_ui = TerminalUI::new(engine, ui_event_rx);
    terminal_ui.set_log_buffer(log_buffer);

    tokio::task::spawn_blocking(move || forward_terminal_events(ui_event_tx));

    let result = terminal_ui.run().await;
    info!("Terminal UI stopped");
    result
}

/// Polls crossterm and forwards events until the UI loop goes away.
fn forward_terminal_events(tx: mpsc::UnboundedSender<UIEvent>) {
    while !tx.is_closed() {
        if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
            continue;
        }
        match event::read() {
            Ok(event) => {
                if let Some(ui_event) = translate(event) {
                    if let Err(e) = tx.send(ui_event) {
                        debug!("Failed to forward terminal event: {}", e);
                        break;
                    }
                }
            }
            Err(e) => {
                debug!("Failed to read terminal event: {}", e);
            }
        }
    }
}

fn translate(event: Event) -> Option<UIEvent> {
    match event {
        Event::Key(key_event) => Some(UIEvent::KeyPress(key_event)),
        Event::Resize(width, height) => Some(UIEvent::Resize(width, height)),
        Event::FocusGained => Some(UIEvent::FocusGained),
        Event::FocusLost => Some(UIEvent::FocusLost),
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(UIEvent::Click)
        }
        _ => None,
    }
}

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::engine::Engine;
use crate::logging::LogBuffer;
use crate::ui::{ScreenLog, UIEvent, UIState};

pub struct TerminalUI {
    pub(super) state: UIState,
    pub(super) engine: Engine<ScreenLog>,
    pub(super) event_rx: mpsc::UnboundedReceiver<UIEvent>,
    pub(super) log_buffer: Option<Arc<LogBuffer>>,
    pub(super) running: bool,
    pub(super) terminal_active: bool,
}

impl TerminalUI {
    pub fn new(engine: Engine<ScreenLog>, event_rx: mpsc::UnboundedReceiver<UIEvent>) -> Self {
        Self {
            state: UIState::new(),
            engine,
            event_rx,
            log_buffer: None,
            running: true,
            terminal_active: false,
        }
    }

    pub fn set_log_buffer(&mut self, log_buffer: Arc<LogBuffer>) {
        self.log_buffer = Some(log_buffer);
    }

    pub async fn run(&mut self) -> Result<()> {
        self.initialize_terminal()?;
        self.render()?;

        debug!("Starting terminal UI loop");

        while self.running {
            let Some(event) = self.event_rx.recv().await else {
                debug!("UI event channel closed");
                break;
            };
            if let Err(e) = self.handle_event(event) {
                error!("Error handling UI event: {}", e);
            }

            if self.running {
                self.render()?;
            }
        }

        self.cleanup()
    }
}

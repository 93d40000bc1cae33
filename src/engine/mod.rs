//! The command-line interaction engine.
//!
//! The engine owns the command table, the history buffer and the input line,
//! and writes output through a [`Renderer`]. Hosts feed it one key at a time;
//! every key is handled to completion before the next one arrives.
mod error;
mod handlers;
mod history;
mod input;
mod key;
mod renderer;
mod table;

pub use input::Edit;
pub use key::{Key, KeyDisposition};
pub use renderer::{BlockKind, OutputBlock, OutputLog, Renderer};

use error::EngineError;
use handlers::portfolio_table;
use history::{HistoryBuffer, Recall};
use input::InputLine;
use table::{CommandTable, Outcome};

use tracing::{debug, warn};

use crate::content::Content;
use crate::markup::{self, Style};

/// Startup options for an [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Skip the startup banner.
    pub quiet: bool,
}

pub struct Engine<R: Renderer> {
    table: CommandTable,
    history: HistoryBuffer,
    input: InputLine,
    renderer: R,
}

impl<R: Renderer> Engine<R> {
    /// Builds the portfolio command set from `content` and shows the banner.
    pub fn new(content: &Content, renderer: R, options: &EngineOptions) -> Self {
        let banner = (!options.quiet).then_some(content.banner.as_str());
        Self::with_table(portfolio_table(content), banner, renderer)
    }

    /// Starts an engine over an arbitrary table.
    fn with_table(table: CommandTable, banner: Option<&str>, mut renderer: R) -> Self {
        if let Some(banner) = banner {
            renderer.append(OutputBlock::new(BlockKind::Banner, banner));
        }
        debug!("Engine started with {} commands", table.len());
        Self {
            table,
            history: HistoryBuffer::new(),
            input: InputLine::new(),
            renderer,
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Handles one key press.
    ///
    /// `Enter`, `ArrowUp` and `ArrowDown` are consumed. Everything else
    /// passes through; for [`Key::Edit`] the host is expected to call
    /// [`InputLine::apply`] (or [`Engine::edit`]).
    pub fn handle_key(&mut self, key: Key) -> KeyDisposition {
        match key {
            Key::Enter => {
                self.submit();
                KeyDisposition::Consumed
            }
            Key::ArrowUp => {
                if let Some(Recall::Entry(line)) = self.history.recall_older() {
                    self.input.set(line);
                }
                KeyDisposition::Consumed
            }
            Key::ArrowDown => {
                match self.history.recall_newer() {
                    Some(Recall::Entry(line)) => self.input.set(line),
                    Some(Recall::Fresh) => self.input.clear(),
                    None => {}
                }
                KeyDisposition::Consumed
            }
            Key::Edit(_) | Key::Other => KeyDisposition::PassThrough,
        }
    }

    /// Handles a key and, if it passed through as an edit, applies it.
    pub fn edit(&mut self, key: Key) -> KeyDisposition {
        let disposition = self.handle_key(key);
        if let (KeyDisposition::PassThrough, Key::Edit(edit)) = (disposition, key) {
            self.input.apply(edit);
        }
        disposition
    }

    /// Submits the current input line.
    ///
    /// The input line is always cleared. A blank line is otherwise ignored;
    /// anything else is trimmed, recorded in history and dispatched. Returns
    /// whether anything was dispatched.
    pub fn submit(&mut self) -> bool {
        if self.input.is_blank() {
            self.input.clear();
            return false;
        }
        let line = self.input.text().trim().to_string();
        self.history.push(line.clone());
        self.dispatch(&line);
        self.input.clear();
        true
    }

    /// Replaces the input line with `line` and submits it.
    pub fn submit_line(&mut self, line: &str) -> bool {
        self.input.set(line);
        self.submit()
    }

    /// Echoes `line`, runs the command it names and renders the result.
    pub fn dispatch(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return;
        };
        let args: Vec<&str> = parts.collect();

        self.renderer
            .append(OutputBlock::new(BlockKind::Echo, markup::echo(line)));

        debug!("Dispatching '{}' with {} argument(s)", command, args.len());
        match self.table.execute(command, &args) {
            Ok(Outcome::Block(markup)) => {
                self.renderer
                    .append(OutputBlock::new(BlockKind::Content, markup));
            }
            Ok(Outcome::Clear) => {
                self.renderer.clear();
                debug!("Output cleared");
            }
            Err(e) => {
                warn!("{}", e);
                self.report(&e);
            }
        }

        self.renderer.reveal_latest();
    }

    fn report(&mut self, error: &EngineError) {
        let text = match error {
            EngineError::UnknownCommand(token) => {
                format!("Command not found: {}", markup::escape(token))
            }
        };
        self.renderer.append(OutputBlock::new(
            BlockKind::Error,
            markup::span(Style::Error, &text),
        ));
    }
}

#[cfg(test)]
impl<R: Renderer> Engine<R> {
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

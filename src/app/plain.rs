//! Line-oriented mode: commands from stdin, styled output on stdout.
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tracing::{error, warn};

use crate::engine::{BlockKind, Engine, OutputBlock, Renderer};
use crate::markup::{self, Style};
use crate::ui::terminal::style_color;

/// Marks a `clear` when the screen cannot be wiped.
const CLEAR_SEPARATOR: &str = "-- cleared --";

/// Writes blocks as text, colored with ANSI escapes when `color` is set.
///
/// The first write failure is kept for the caller; later blocks are dropped.
pub struct AnsiRenderer<W: Write> {
    out: W,
    color: bool,
    /// Print echo blocks. A terminal already shows the typed line after the
    /// prompt.
    echo: bool,
    error: Option<io::Error>,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            echo: true,
            error: None,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn prompt(&mut self) {
        let result = self.write_styled(Some(Style::Prompt), "$ ").and_then(|()| self.out.flush());
        self.record(result);
    }

    fn write_styled(&mut self, style: Option<Style>, text: &str) -> io::Result<()> {
        match style {
            Some(style) if self.color => queue!(
                self.out,
                SetForegroundColor(style_color(style)),
                Print(text),
                ResetColor
            ),
            _ => self.out.write_all(text.as_bytes()),
        }
    }

    fn write_block(&mut self, block: &OutputBlock) -> io::Result<()> {
        for line in markup::parse(&block.markup) {
            for segment in &line {
                self.write_styled(segment.style, &segment.text)?;
            }
            writeln!(self.out)?;
        }
        if block.kind != BlockKind::Echo {
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.error.is_none() {
                error!("Failed to write output: {}", e);
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn append(&mut self, block: OutputBlock) {
        if self.error.is_some() || (block.kind == BlockKind::Echo && !self.echo) {
            return;
        }
        let result = self.write_block(&block);
        self.record(result);
    }

    /// Wipes the screen when writing ANSI. Plain output cannot take back
    /// what it printed, so it gets a separator line instead.
    fn clear(&mut self) {
        if self.error.is_some() {
            return;
        }
        let result = if self.color {
            queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))
        } else {
            writeln!(self.out, "{CLEAR_SEPARATOR}\n")
        };
        let result = result.and_then(|()| self.out.flush());
        self.record(result);
    }
}

/// Feeds each input line to the engine until end of input.
///
/// With `interactive` set a prompt is shown before every line. Bytes that
/// are not valid UTF-8 are replaced rather than ending the session.
pub fn run<R: BufRead, W: Write>(
    engine: &mut Engine<AnsiRenderer<W>>,
    mut input: R,
    interactive: bool,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        if interactive {
            engine.renderer_mut().prompt();
        }
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read command")?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_newline(&buf));
        if matches!(line, Cow::Owned(_)) {
            warn!("Replaced invalid UTF-8 in input line");
        }
        engine.submit_line(&line);

        if let Some(e) = engine.renderer_mut().take_error() {
            return Err(e).context("failed to write output");
        }
    }
    Ok(())
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::engine::EngineOptions;

    fn session(input: impl AsRef<[u8]>, color: bool, options: EngineOptions) -> String {
        let mut engine = Engine::new(
            &Content::builtin(),
            AnsiRenderer::new(Vec::new(), color),
            &options,
        );
        run(&mut engine, input.as_ref(), false).unwrap();
        String::from_utf8(into_output(engine)).unwrap()
    }

    fn into_output(engine: Engine<AnsiRenderer<Vec<u8>>>) -> Vec<u8> {
        engine.into_renderer().out
    }

    fn quiet() -> EngineOptions {
        EngineOptions { quiet: true }
    }

    #[test]
    fn commands_print_plain_text_without_color() {
        let out = session("about\n", false, quiet());
        assert!(out.starts_with("$ about\n"));
        assert!(out.contains("• Name: Muhammad-Ali Shafique"));
        assert!(!out.contains("<span"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let out = session("foo bar\n", false, quiet());
        assert!(out.contains("$ foo bar\n"));
        assert!(out.contains("Command not found: foo\n"));
        assert!(!out.contains("Command not found: foo bar"));
    }

    #[test]
    fn blank_lines_produce_nothing() {
        assert_eq!(session("\n   \n", false, quiet()), "");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let out = session(b"\xff\xfe\nabout\r\n", false, quiet());
        assert!(out.contains("Command not found: \u{fffd}\u{fffd}"));
        assert!(out.contains("$ about\n"));
        assert!(out.contains("Muhammad-Ali Shafique"));
    }

    #[test]
    fn banner_is_printed_unless_quiet() {
        let out = session("", false, EngineOptions::default());
        assert!(out.contains("Type 'help' to see available commands"));
    }

    #[test]
    fn color_mode_emits_escapes_and_clears() {
        let out = session("help\nclear\n", true, quiet());
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("\u{1b}[2J"));
        assert!(!out.contains(CLEAR_SEPARATOR));
    }

    #[test]
    fn plain_clear_prints_a_separator() {
        let out = session("about\nclear\nskills\n", false, quiet());
        let separator = out.find(CLEAR_SEPARATOR).unwrap();
        assert!(out[..separator].contains("Muhammad-Ali Shafique"));
        assert!(out[separator..].contains("$ skills\n"));
    }

    #[test]
    fn interactive_mode_prompts_without_repeating_the_line() {
        let mut engine = Engine::new(
            &Content::builtin(),
            AnsiRenderer::new(Vec::new(), false).with_echo(false),
            &quiet(),
        );
        run(&mut engine, "about\n".as_bytes(), true).unwrap();
        let out = String::from_utf8(into_output(engine)).unwrap();
        assert!(out.starts_with("$ "));
        assert!(!out.contains("$ about"));
        assert!(out.contains("Muhammad-Ali Shafique"));
        assert!(out.ends_with("$ "));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_stop_the_loop() {
        let mut engine = Engine::new(&Content::builtin(), AnsiRenderer::new(Broken, false), &quiet());
        let err = run(&mut engine, "about\nskills\n".as_bytes(), false).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to write output"));
    }
}

//! The scrollable output area of the terminal view.
use crate::engine::{BlockKind, OutputBlock, OutputLog, Renderer};
use crate::markup::{self, StyledLine};

/// Output blocks plus a scroll position, measured in rows above the newest
/// row.
#[derive(Debug, Default)]
pub struct ScreenLog {
    log: OutputLog,
    scroll_offset: usize,
}

impl ScreenLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Lays every block out as rows no wider than `width`. Blocks other than
    /// command echoes are followed by a blank row.
    pub fn rows(&self, width: usize) -> Vec<StyledLine> {
        let mut rows = Vec::new();
        for block in self.log.blocks() {
            for line in markup::parse(&block.markup) {
                rows.extend(markup::wrap(&line, width));
            }
            if block.kind != BlockKind::Echo {
                rows.push(StyledLine::new());
            }
        }
        rows
    }

    /// The rows that fit in a `width` x `height` window at the current scroll
    /// position.
    pub fn visible_rows(&self, width: usize, height: usize) -> Vec<StyledLine> {
        let mut rows = self.rows(width);
        let total = rows.len();
        let offset = self.scroll_offset.min(total.saturating_sub(height));
        let end = total - offset;
        let start = end.saturating_sub(height);
        rows.truncate(end);
        rows.drain(..start);
        rows
    }

    pub fn scroll_up(&mut self, lines: usize, width: usize, height: usize) {
        let max_scroll = self.rows(width).len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max_scroll);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Renderer for ScreenLog {
    fn append(&mut self, block: OutputBlock) {
        self.log.append(block);
    }

    fn clear(&mut self) {
        self.log.clear();
        self.scroll_offset = 0;
    }

    fn reveal_latest(&mut self) {
        self.jump_to_bottom();
    }
}

#[cfg(test)]
impl ScreenLog {
    pub fn blocks(&self) -> &[OutputBlock] {
        self.log.blocks()
    }
}

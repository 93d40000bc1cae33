//! Submitted-line history with a recall cursor.

/// Where a recall step landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// The cursor points at a recorded line.
    Entry(&'a str),
    /// The cursor moved past the newest line; the input should be empty.
    Fresh,
}

/// Append-only list of submitted lines.
///
/// The cursor ranges over `0..=len`. `len` is the resting state: nothing is
/// being recalled and the user is editing a fresh line.
#[derive(Debug, Default, Clone)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line and returns the cursor to rest.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Steps toward the oldest entry, stopping at it.
    ///
    /// Returns `None` when there is no history.
    pub fn recall_older(&mut self) -> Option<Recall<'_>> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        Some(Recall::Entry(&self.entries[self.cursor]))
    }

    /// Steps toward the newest entry. Stepping past it rests the cursor.
    ///
    /// Returns `None` when there is no history.
    pub fn recall_newer(&mut self) -> Option<Recall<'_>> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor + 1 >= self.entries.len() {
            self.cursor = self.entries.len();
            return Some(Recall::Fresh);
        }
        self.cursor += 1;
        Some(Recall::Entry(&self.entries[self.cursor]))
    }
}

#[cfg(test)]
impl HistoryBuffer {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cursor is at rest.
    pub fn is_resting(&self) -> bool {
        self.cursor == self.entries.len()
    }
}

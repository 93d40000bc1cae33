//! The display capability the engine writes to.

/// What produced a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The startup banner.
    Banner,
    /// The echo of a submitted line.
    Echo,
    /// The text a command handler produced.
    Content,
    /// A dispatch failure.
    Error,
}

/// One unit of output: pre-formatted markup plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBlock {
    pub kind: BlockKind,
    pub markup: String,
}

impl OutputBlock {
    pub fn new(kind: BlockKind, markup: impl Into<String>) -> Self {
        Self {
            kind,
            markup: markup.into(),
        }
    }
}

/// A surface that shows output blocks.
///
/// Markup is rendered as-is; the engine never asks a renderer to sanitise it.
pub trait Renderer {
    /// Appends a block after every block shown so far.
    fn append(&mut self, block: OutputBlock);

    /// Removes every block.
    fn clear(&mut self);

    /// Brings the newest block into view.
    fn reveal_latest(&mut self) {}
}

/// In-memory output log. Backs the terminal screen and is the renderer
/// tests inspect.
#[derive(Debug, Default, Clone)]
pub struct OutputLog {
    blocks: Vec<OutputBlock>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[OutputBlock] {
        &self.blocks
    }
}

#[cfg(test)]
impl OutputLog {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn last(&self) -> Option<&OutputBlock> {
        self.blocks.last()
    }
}

impl Renderer for OutputLog {
    fn append(&mut self, block: OutputBlock) {
        self.blocks.push(block);
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn append(&mut self, block: OutputBlock) {
        (**self).append(block);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn reveal_latest(&mut self) {
        (**self).reveal_latest();
    }
}

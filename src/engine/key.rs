//! Keys as the engine sees them.
use super::input::Edit;

/// A key press delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    /// A text-field edit; passed through to the input line.
    Edit(Edit),
    /// Anything else; the host decides what it means.
    Other,
}

/// Whether the engine claimed a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The engine handled the key; its default action must not run.
    Consumed,
    /// The engine ignored the key; the host performs the default action.
    PassThrough,
}

//! Log capture for the terminal UI.
//!
//! A `tracing` layer records events into a bounded buffer, which forwards
//! them to the UI in batches.
pub mod buffer;
pub mod collector;

pub use buffer::LogBuffer;
pub use collector::TerminalLogCollector;

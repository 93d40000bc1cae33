//! Which view fills the output area.
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UIMode {
    /// The portfolio terminal.
    #[default]
    Terminal,
    /// Captured application logs at or above `level`.
    Logs { level: Level },
}

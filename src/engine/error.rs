//! Errors raised while dispatching a command line.

/// The ways a dispatch can fail. Every variant is recoverable: the engine
/// reports it as an error block and keeps accepting input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Command not found: {0}")]
    UnknownCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_display_names_token() {
        let e = EngineError::UnknownCommand("foo".into());
        assert_eq!(format!("{e}"), "Command not found: foo");
    }
}

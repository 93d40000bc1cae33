//! Command name to handler mapping.
use std::collections::HashMap;

use super::error::EngineError;

/// What a handler asks the engine to do with the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Append this markup verbatim as a new block.
    Block(String),
    /// Remove every block; append nothing.
    Clear,
}

/// A user-invocable command.
///
/// Handlers are total: they accept any (possibly empty) argument list.
pub trait CommandHandler {
    /// One-line description for `help`.
    fn description(&self) -> &str;

    fn run(&self, args: &[&str]) -> Outcome;
}

/// Registered commands, keyed by exact name. Registration order is kept for
/// listings.
#[derive(Default)]
pub struct CommandTable {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
    order: Vec<String>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler, replacing any handler already under `name`.
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_none() {
            self.order.push(name);
        }
    }

    /// Moves every command of `other` in after the ones already registered,
    /// keeping their order.
    pub fn append(&mut self, mut other: CommandTable) {
        for name in other.order.drain(..) {
            if let Some(handler) = other.handlers.remove(&name) {
                self.register(name, handler);
            }
        }
    }

    /// `(name, description)` pairs in registration order.
    pub fn listing(&self) -> Vec<(&str, &str)> {
        self.order
            .iter()
            .filter_map(|name| {
                self.handlers
                    .get(name)
                    .map(|h| (name.as_str(), h.description()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Runs the handler registered under `name`.
    pub fn execute(&self, name: &str, args: &[&str]) -> Result<Outcome, EngineError> {
        match self.handlers.get(name) {
            Some(handler) => Ok(handler.run(args)),
            None => Err(EngineError::UnknownCommand(name.to_string())),
        }
    }
}

#[cfg(test)]
impl CommandTable {
    /// Command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl CommandHandler for Fixed {
        fn description(&self) -> &str {
            "fixed text"
        }

        fn run(&self, _args: &[&str]) -> Outcome {
            Outcome::Block(self.0.to_string())
        }
    }

    struct CountArgs;

    impl CommandHandler for CountArgs {
        fn description(&self) -> &str {
            "count arguments"
        }

        fn run(&self, args: &[&str]) -> Outcome {
            Outcome::Block(args.len().to_string())
        }
    }

    #[test]
    fn execute_known_command() {
        let mut table = CommandTable::new();
        table.register("hi", Box::new(Fixed("hello")));
        assert_eq!(
            table.execute("hi", &[]),
            Ok(Outcome::Block("hello".into()))
        );
    }

    #[test]
    fn execute_passes_arguments() {
        let mut table = CommandTable::new();
        table.register("count", Box::new(CountArgs));
        assert_eq!(
            table.execute("count", &["a", "b"]),
            Ok(Outcome::Block("2".into()))
        );
    }

    #[test]
    fn unknown_command_is_an_error() {
        let table = CommandTable::new();
        assert_eq!(
            table.execute("nope", &[]),
            Err(EngineError::UnknownCommand("nope".into()))
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut table = CommandTable::new();
        table.register("about", Box::new(Fixed("x")));
        assert!(table.execute("about", &[]).is_ok());
        assert_eq!(
            table.execute("About", &[]),
            Err(EngineError::UnknownCommand("About".into()))
        );
    }

    #[test]
    fn append_keeps_existing_commands_first() {
        let mut first = CommandTable::new();
        first.register("help", Box::new(Fixed("h")));
        let mut rest = CommandTable::new();
        rest.register("b", Box::new(Fixed("2")));
        rest.register("a", Box::new(CountArgs));
        first.append(rest);
        assert_eq!(first.names().collect::<Vec<_>>(), ["help", "b", "a"]);
        assert_eq!(first.execute("a", &["x"]), Ok(Outcome::Block("1".into())));
    }

    #[test]
    fn re_registering_replaces_without_duplicating_order() {
        let mut table = CommandTable::new();
        table.register("a", Box::new(Fixed("1")));
        table.register("b", Box::new(Fixed("2")));
        table.register("a", Box::new(Fixed("3")));
        assert_eq!(table.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(table.execute("a", &[]), Ok(Outcome::Block("3".into())));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn listing_follows_registration_order() {
        let mut table = CommandTable::new();
        table.register("z", Box::new(Fixed("")));
        table.register("a", Box::new(CountArgs));
        assert_eq!(
            table.listing(),
            vec![("z", "fixed text"), ("a", "count arguments")]
        );
    }
}

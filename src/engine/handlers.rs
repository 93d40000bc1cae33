//! The portfolio command set.
use crate::content::Content;
use crate::markup::{span, Style};

use super::table::{CommandHandler, CommandTable, Outcome};

/// Prints a fixed block of content.
pub struct ContentHandler {
    description: String,
    markup: String,
}

impl ContentHandler {
    pub fn new(description: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            markup: markup.into(),
        }
    }
}

impl CommandHandler for ContentHandler {
    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, _args: &[&str]) -> Outcome {
        Outcome::Block(self.markup.clone())
    }
}

/// Empties the output log.
pub struct ClearHandler;

impl ClearHandler {
    const DESCRIPTION: &'static str = "Clear terminal";
}

impl CommandHandler for ClearHandler {
    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn run(&self, _args: &[&str]) -> Outcome {
        Outcome::Clear
    }
}

/// Lists the registered commands. The listing is rendered once, when the
/// table is built.
pub struct HelpHandler {
    markup: String,
}

impl HelpHandler {
    const DESCRIPTION: &'static str = "Show this list of commands";

    pub fn new(listing: &[(&str, &str)], hint: &str) -> Self {
        let width = listing
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0)
            .max(10)
            + 2;

        let mut markup = span(Style::Success, "Available Commands:");
        for (name, description) in listing {
            markup.push('\n');
            markup.push_str(&format!("{name:<width$}- {description}"));
        }
        if !hint.is_empty() {
            markup.push_str("\n\n");
            markup.push_str(hint);
        }

        Self { markup }
    }
}

impl CommandHandler for HelpHandler {
    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn run(&self, _args: &[&str]) -> Outcome {
        Outcome::Block(self.markup.clone())
    }
}

/// Builds the table of portfolio commands from `content`.
pub fn portfolio_table(content: &Content) -> CommandTable {
    let entries = [
        ("about", "Display info about me", &content.about),
        ("skills", "Show technical skills", &content.skills),
        ("projects", "List projects", &content.projects),
        ("experience", "Display work experience", &content.experience),
        ("contact", "Show contact info", &content.contact),
    ];

    let mut commands = CommandTable::new();
    for (name, description, markup) in entries {
        commands.register(name, Box::new(ContentHandler::new(description, markup.as_str())));
    }
    commands.register("clear", Box::new(ClearHandler));

    // help lists itself first, then whatever the table holds.
    let mut listing = vec![("help", HelpHandler::DESCRIPTION)];
    listing.extend(commands.listing());
    let help = HelpHandler::new(&listing, &content.help_hint);

    let mut table = CommandTable::new();
    table.register("help", Box::new(help));
    table.append(commands);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::plain_text;

    const NAMES: [&str; 7] = [
        "help",
        "about",
        "skills",
        "projects",
        "experience",
        "contact",
        "clear",
    ];

    #[test]
    fn table_registers_every_command_in_order() {
        let table = portfolio_table(&Content::builtin());
        assert_eq!(table.names().collect::<Vec<_>>(), NAMES);
    }

    #[test]
    fn help_lists_every_command() {
        let table = portfolio_table(&Content::builtin());
        let Ok(Outcome::Block(markup)) = table.execute("help", &[]) else {
            panic!("help should produce a block");
        };
        let text = plain_text(&markup);
        for name in NAMES {
            assert!(
                text.lines().any(|l| l.starts_with(name)),
                "help is missing {name}:\n{text}"
            );
        }
        assert!(text.contains("navigate command history"));
    }

    #[test]
    fn help_descriptions_match_table() {
        let table = portfolio_table(&Content::builtin());
        let Ok(Outcome::Block(markup)) = table.execute("help", &[]) else {
            panic!("help should produce a block");
        };
        for (_, description) in table.listing() {
            assert!(markup.contains(description));
        }
    }

    #[test]
    fn content_handlers_return_content_verbatim() {
        let content = Content::from_json(r#"{"skills": "<b>rust</b>"}"#).unwrap();
        let table = portfolio_table(&content);
        assert_eq!(
            table.execute("skills", &["ignored", "args"]),
            Ok(Outcome::Block("<b>rust</b>".into()))
        );
    }

    #[test]
    fn clear_asks_for_clear() {
        let table = portfolio_table(&Content::builtin());
        assert_eq!(table.execute("clear", &[]), Ok(Outcome::Clear));
    }

    #[test]
    fn empty_hint_is_omitted() {
        let help = HelpHandler::new(&[("x", "does x")], "");
        let Outcome::Block(markup) = help.run(&[]) else {
            panic!("help should produce a block");
        };
        assert!(!markup.ends_with('\n'));
        assert!(plain_text(&markup).ends_with("does x"));
    }
}

//! Styled markup carried by output blocks.
//!
//! Blocks hold HTML-like markup: `<span class="...">` spans and
//! `<a class="link" ...>` anchors around plain text. Handlers build it with
//! [`span`]; display surfaces that cannot render it natively turn it into
//! styled segments with [`parse`].
mod parse;
mod wrap;

pub use parse::{parse, Segment, StyledLine};
#[cfg(test)]
pub use parse::plain_text;
pub use wrap::wrap;

/// The styling categories a block may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    AsciiArt,
    Success,
    Info,
    Highlight,
    Error,
    Prompt,
    Command,
    Link,
}

impl Style {
    /// The class name used in markup for this style.
    pub fn class(self) -> &'static str {
        match self {
            Style::AsciiArt => "ascii-art",
            Style::Success => "success",
            Style::Info => "info",
            Style::Highlight => "highlight",
            Style::Error => "error",
            Style::Prompt => "prompt-symbol",
            Style::Command => "command",
            Style::Link => "link",
        }
    }

    /// Resolves a `class` attribute value. The first recognised class wins.
    pub fn from_class(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            "ascii-art" => Some(Style::AsciiArt),
            "success" => Some(Style::Success),
            "info" => Some(Style::Info),
            "highlight" => Some(Style::Highlight),
            "error" => Some(Style::Error),
            "prompt-symbol" | "prompt" => Some(Style::Prompt),
            "command" => Some(Style::Command),
            "link" => Some(Style::Link),
            _ => None,
        })
    }
}

/// Wraps already-escaped markup in a styled span.
pub fn span(style: Style, inner: &str) -> String {
    format!("<span class=\"{}\">{}</span>", style.class(), inner)
}

/// Escapes text typed by the user so it renders literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The echo of a submitted line: prompt symbol followed by the command text.
pub fn echo(line: &str) -> String {
    format!(
        "{} {}",
        span(Style::Prompt, "$"),
        span(Style::Command, &escape(line))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn class_names_resolve_back() {
        for style in [
            Style::AsciiArt,
            Style::Success,
            Style::Info,
            Style::Highlight,
            Style::Error,
            Style::Prompt,
            Style::Command,
            Style::Link,
        ] {
            assert_eq!(Style::from_class(style.class()), Some(style));
        }
    }

    #[test]
    fn from_class_skips_unknown_classes() {
        assert_eq!(Style::from_class("output error"), Some(Style::Error));
        assert_eq!(Style::from_class("output"), None);
    }

    #[test]
    fn span_wraps_inner_markup() {
        assert_eq!(
            span(Style::Info, "hi"),
            "<span class=\"info\">hi</span>"
        );
    }

    #[test]
    fn escape_neutralises_tags() {
        assert_eq!(
            escape("<b>&\"x'"),
            "&lt;b&gt;&amp;&quot;x&#39;"
        );
    }

    #[test]
    fn echo_marks_prompt_and_command() {
        let markup = echo("about");
        let lines = parse(&markup);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].style, Some(Style::Prompt));
        assert_eq!(lines[0][0].text, "$");
        assert_eq!(lines[0].last().map(|s| s.style), Some(Some(Style::Command)));
        assert_eq!(plain_text(&markup), "$ about");
    }

    proptest! {
        #[test]
        fn escaped_text_survives_parse(text in "[ -~]{0,40}") {
            prop_assert_eq!(plain_text(&escape(&text)), text);
        }
    }
}

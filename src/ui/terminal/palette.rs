use crossterm::style::Color;
use tracing::Level;

use crate::markup::Style;

/// Foreground color for a markup style.
pub fn style_color(style: Style) -> Color {
    match style {
        Style::AsciiArt => Color::Green,
        Style::Success => Color::Green,
        Style::Info => Color::Cyan,
        Style::Highlight => Color::Yellow,
        Style::Error => Color::Red,
        Style::Prompt => Color::Green,
        Style::Command => Color::White,
        Style::Link => Color::Blue,
    }
}

pub(super) fn level_color(level: Level) -> Color {
    match level {
        Level::ERROR => Color::Red,
        Level::WARN => Color::Yellow,
        Level::INFO => Color::Blue,
        Level::DEBUG => Color::White,
        Level::TRACE => Color::DarkGrey,
    }
}

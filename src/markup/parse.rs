use super::Style;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Option<Style>,
}

/// One display line made of styled segments.
pub type StyledLine = Vec<Segment>;

/// Parses block markup into styled lines.
///
/// Recognises `span` and `a` tags (styled by their `class`, anchors default
/// to [`Style::Link`]), `<br>`, and the common character entities. Unknown
/// tags are dropped. A closing tag ends the innermost open tag of the same
/// name, so an unclosed tag cannot swallow an outer span's end. A `<`
/// without a matching `>` is kept as text.
pub fn parse(markup: &str) -> Vec<StyledLine> {
    let mut parser = Parser::default();
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => match rest.find('>') {
                Some(end) => {
                    parser.tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    parser.push_char('<');
                    rest = &rest[1..];
                }
            },
            '&' => {
                let (decoded, consumed) = decode_entity(rest);
                parser.push_char(decoded);
                rest = &rest[consumed..];
            }
            '\n' => {
                parser.newline();
                rest = &rest[1..];
            }
            '\r' => rest = &rest[1..],
            _ => {
                parser.push_char(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    parser.finish()
}

/// The text content of some markup, lines joined with `\n`.
#[cfg(test)]
pub fn plain_text(markup: &str) -> String {
    parse(markup)
        .iter()
        .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Default)]
struct Parser {
    lines: Vec<StyledLine>,
    line: StyledLine,
    text: String,
    /// Open tags, innermost last.
    stack: Vec<(String, Option<Style>)>,
}

/// Elements that never take a closing tag.
const VOID_TAGS: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "link", "meta"];

impl Parser {
    fn current_style(&self) -> Option<Style> {
        self.stack.iter().rev().find_map(|(_, style)| *style)
    }

    fn flush(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let style = self.current_style();
        let text = std::mem::take(&mut self.text);
        match self.line.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.line.push(Segment { text, style }),
        }
    }

    fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    fn newline(&mut self) {
        self.flush();
        self.lines.push(std::mem::take(&mut self.line));
    }

    fn tag(&mut self, body: &str) {
        let body = body.trim();
        if let Some(closing) = body.strip_prefix('/') {
            self.close(&tag_name(closing));
            return;
        }

        let name = tag_name(body);
        if name == "br" {
            self.newline();
            return;
        }

        self.flush();
        if body.ends_with('/') || VOID_TAGS.contains(&name.as_str()) {
            return;
        }
        let style = match name.as_str() {
            "span" => attribute(body, "class").and_then(Style::from_class),
            "a" => attribute(body, "class")
                .and_then(Style::from_class)
                .or(Some(Style::Link)),
            _ => None,
        };
        self.stack.push((name, style));
    }

    /// Pops back to the innermost open tag called `name`. A closing tag with
    /// no open counterpart is ignored.
    fn close(&mut self, name: &str) {
        self.flush();
        if let Some(pos) = self.stack.iter().rposition(|(open, _)| open == name) {
            self.stack.truncate(pos);
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        self.newline();
        self.lines
    }
}

fn tag_name(body: &str) -> String {
    body.trim()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Extracts a quoted attribute value from a tag body.
fn attribute<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let mut search = body;
    while let Some(pos) = search.find(name) {
        let before_ok = search[..pos]
            .chars()
            .last()
            .is_none_or(|c| c.is_whitespace());
        let after = search[pos + name.len()..].trim_start();
        if before_ok {
            if let Some(value) = after.strip_prefix('=') {
                let value = value.trim_start();
                let quote = value.chars().next()?;
                if quote == '"' || quote == '\'' {
                    let inner = &value[1..];
                    return inner.find(quote).map(|end| &inner[..end]);
                }
            }
        }
        search = &search[pos + name.len()..];
    }
    None
}

/// Decodes an entity at the start of `input` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_entity(input: &str) -> (char, usize) {
    let Some(end) = input.char_indices().take(10).find(|(_, c)| *c == ';').map(|(i, _)| i) else {
        return ('&', 1);
    };
    let name = &input[1..end];
    let decoded = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => name.strip_prefix('#').and_then(|num| {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => num.parse::<u32>().ok(),
            };
            code.and_then(char::from_u32)
        }),
    };

    match decoded {
        Some(c) => (c, end + 1),
        None => ('&', 1),
    }
}

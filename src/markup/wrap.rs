use unicode_width::UnicodeWidthChar;

use super::{Segment, StyledLine};

/// Hard-wraps a styled line to `width` display columns.
///
/// Breaks at the last space before the limit when there is one, otherwise
/// mid-word. An empty line stays a single empty line.
pub fn wrap(line: &StyledLine, width: usize) -> Vec<StyledLine> {
    if width == 0 {
        return vec![line.clone()];
    }

    let cells: Vec<(char, usize)> = line
        .iter()
        .enumerate()
        .flat_map(|(idx, seg)| seg.text.chars().map(move |c| (c, idx)))
        .collect();

    let mut rows = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        let mut used = 0;
        let mut end = start;
        let mut last_space = None;
        while end < cells.len() {
            let w = UnicodeWidthChar::width(cells[end].0).unwrap_or(0);
            if used + w > width {
                break;
            }
            if cells[end].0 == ' ' {
                last_space = Some(end);
            }
            used += w;
            end += 1;
        }

        if end == start {
            // A single glyph wider than the row.
            end = start + 1;
        } else if end < cells.len() {
            if let Some(space) = last_space.filter(|&s| s > start) {
                end = space + 1;
            }
        }

        rows.push(collect_row(line, &cells[start..end]));
        start = end;
    }

    if rows.is_empty() {
        rows.push(Vec::new());
    }
    rows
}

fn collect_row(line: &StyledLine, cells: &[(char, usize)]) -> StyledLine {
    let mut row: StyledLine = Vec::new();
    let mut current: Option<usize> = None;
    for &(c, idx) in cells {
        if current == Some(idx) {
            if let Some(last) = row.last_mut() {
                last.text.push(c);
            }
        } else {
            row.push(Segment {
                text: c.to_string(),
                style: line[idx].style,
            });
            current = Some(idx);
        }
    }
    row
}

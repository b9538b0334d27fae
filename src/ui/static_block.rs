//! A block of lines centered in the content region. Takes no input.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Center each line within the block's widest line, then center the block
/// inside `width` x `height`. Output never exceeds `height` lines.
pub fn centered_block(
    lines: &[&str],
    width: usize,
    height: usize,
    style: Style,
) -> Vec<Line<'static>> {
    if lines.is_empty() {
        return Vec::new();
    }
    let block_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let left = width.saturating_sub(block_width) / 2;
    let top = height.saturating_sub(lines.len()) / 2;

    let mut out = vec![Line::default(); top];
    for line in lines {
        let inner = block_width.saturating_sub(line.width()) / 2;
        out.push(Line::from(vec![
            Span::raw(" ".repeat(left + inner)),
            Span::styled(line.to_string(), style),
        ]));
    }
    out.truncate(height);
    out
}

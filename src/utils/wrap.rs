//! Width-aware word wrapping for styled lines.
//!
//! Everything the content area shows is pre-wrapped to an explicit width
//! before it reaches ratatui, so line counts used for scrolling and slot
//! truncation always match what ends up on screen. Lines are broken at
//! spaces; tokens wider than the available width are split mid-word.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Wrap every line to `width` columns, preserving span styles.
pub fn prewrap_lines(lines: &[Line<'_>], width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        out.extend(wrap_line(line, width));
    }
    out
}

/// Wrap a single line. A zero width disables wrapping.
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![to_owned_line(line)];
    }

    let mut wrapper = LineWrapper::new(width, line.style);
    for span in &line.spans {
        for ch in span.content.chars() {
            wrapper.push_char(ch, span.style);
        }
    }
    wrapper.finish()
}

/// Plain-text convenience over [`wrap_line`].
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    wrap_line(&Line::raw(text), width)
        .into_iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

/// Prefix every line with `indent` blank columns.
pub fn indent_lines(lines: Vec<Line<'static>>, indent: usize) -> Vec<Line<'static>> {
    if indent == 0 {
        return lines;
    }
    let pad = " ".repeat(indent);
    lines
        .into_iter()
        .map(|line| {
            let style = line.style;
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            spans.push(Span::raw(pad.clone()));
            spans.extend(line.spans);
            Line::from(spans).style(style)
        })
        .collect()
}

fn to_owned_line(line: &Line<'_>) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|s| Span::styled(s.content.to_string(), s.style))
        .collect();
    Line::from(spans).style(line.style)
}

struct LineWrapper {
    width: usize,
    line_style: Style,
    out: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    current_width: usize,
    word: Vec<(char, Style)>,
    word_width: usize,
}

impl LineWrapper {
    fn new(width: usize, line_style: Style) -> Self {
        Self {
            width,
            line_style,
            out: Vec::new(),
            current: Vec::new(),
            current_width: 0,
            word: Vec::new(),
            word_width: 0,
        }
    }

    fn push_char(&mut self, ch: char, style: Style) {
        if ch == ' ' {
            self.flush_word();
            self.push_space(style);
        } else {
            self.word_width += ch.width().unwrap_or(0);
            self.word.push((ch, style));
        }
    }

    fn push_space(&mut self, style: Style) {
        // Continuation lines never start with the space that caused the break.
        if self.current_width == 0 && !self.out.is_empty() {
            return;
        }
        if self.current_width < self.width {
            self.append(' ', style, 1);
        } else {
            self.emit();
        }
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        if self.current_width > 0 && self.current_width + self.word_width > self.width {
            self.emit();
        }
        let word = std::mem::take(&mut self.word);
        self.word_width = 0;
        for (ch, style) in word {
            let w = ch.width().unwrap_or(0);
            if self.current_width > 0 && self.current_width + w > self.width {
                self.emit();
            }
            self.append(ch, style, w);
        }
    }

    fn append(&mut self, ch: char, style: Style, w: usize) {
        match self.current.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push(ch),
            _ => self.current.push(Span::styled(ch.to_string(), style)),
        }
        self.current_width += w;
    }

    fn emit(&mut self) {
        let mut spans = std::mem::take(&mut self.current);
        trim_trailing_spaces(&mut spans);
        self.out.push(Line::from(spans).style(self.line_style));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_word();
        if !self.current.is_empty() || self.out.is_empty() {
            self.emit();
        }
        self.out
    }
}

fn trim_trailing_spaces(spans: &mut Vec<Span<'static>>) {
    while let Some(last) = spans.last_mut() {
        let trimmed = last.content.trim_end_matches(' ').len();
        if trimmed == 0 {
            spans.pop();
        } else {
            last.content.to_mut().truncate(trimmed);
            break;
        }
    }
}

//! Screen partitioning for the main view.
//!
//! Top to bottom: header, tab bar, rule, content, help line. Every region
//! except the content is a fixed single line, apart from the header, whose
//! height is measured from its wrapped text. The content region takes the
//! rest and is never smaller than one line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::utils::wrap::wrap_text;

/// Blank line above the header text.
pub const HEADER_TOP_PADDING: u16 = 1;
/// Blank columns left of the header text.
pub const HEADER_LEFT_PADDING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header_height: u16,
    pub tab_bar_height: u16,
    pub separator_height: u16,
    pub help_height: u16,
    pub content_width: u16,
    pub content_height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub rule: Rect,
    pub content: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn compute(width: u16, height: u16, header: &str) -> Self {
        let header_lines =
            u16::try_from(header_text_lines(header, width).len()).unwrap_or(u16::MAX);
        let header_height = HEADER_TOP_PADDING.saturating_add(header_lines);
        let tab_bar_height = 1;
        let separator_height = 1;
        let help_height = 1;
        let chrome = [tab_bar_height, separator_height, help_height]
            .into_iter()
            .fold(header_height, u16::saturating_add);
        let content_height = height.saturating_sub(chrome).max(1);
        Self {
            header_height,
            tab_bar_height,
            separator_height,
            help_height,
            content_width: width,
            content_height,
        }
    }

    pub fn areas(&self, area: Rect) -> ScreenAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header_height),
                Constraint::Length(self.tab_bar_height),
                Constraint::Length(self.separator_height),
                Constraint::Length(self.content_height),
                Constraint::Length(self.help_height),
            ])
            .split(area);
        ScreenAreas {
            header: chunks[0],
            tabs: chunks[1],
            rule: chunks[2],
            content: chunks[3],
            help: chunks[4],
        }
    }
}

/// The header text as it is drawn, one entry per wrapped line.
pub fn header_text_lines(header: &str, width: u16) -> Vec<String> {
    let available = width.saturating_sub(HEADER_LEFT_PADDING).max(1);
    wrap_text(header, available as usize)
}

//! Vertically scrolling window over one pre-wrapped document.
//!
//! The owner wraps the document to the current width and hands the lines
//! over with [`ScrollViewport::set_content`]; a width change means wrapping
//! again and calling `set_content` with the new lines.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::text::Line;

const WHEEL_LINES: isize = 3;

#[derive(Debug, Clone, Default)]
pub struct ScrollViewport {
    lines: Vec<Line<'static>>,
    offset: usize,
    width: usize,
    height: usize,
}

impl ScrollViewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lines: Vec::new(),
            offset: 0,
            width,
            height,
        }
    }

    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.clamp_offset();
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn scroll(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn render(&self) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(self.offset)
            .take(self.height)
            .cloned()
            .collect()
    }

    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let page = self.height.max(1) as isize;
        let half = (self.height / 2).max(1) as isize;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.scroll(-half),
            KeyCode::Char('d') if ctrl => self.scroll(half),
            KeyCode::Up | KeyCode::Char('k') => self.scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll(1),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll(-page),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => self.scroll(page),
            KeyCode::Char('u') => self.scroll(-half),
            KeyCode::Char('d') => self.scroll(half),
            KeyCode::Home | KeyCode::Char('g') => self.goto_top(),
            KeyCode::End | KeyCode::Char('G') => self.goto_bottom(),
            _ => return false,
        }
        true
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll(-WHEEL_LINES),
            MouseEventKind::ScrollDown => self.scroll(WHEEL_LINES),
            _ => return false,
        }
        true
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

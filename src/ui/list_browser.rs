//! Cursor-driven list of records rendered in fixed-height slots.
//!
//! Every record gets [`SLOT_HEIGHT`] lines followed by a [`SLOT_GAP`] line
//! gap. Content longer than a slot is cut off; slot height never adapts.
//! The visible window is the page of slots that contains the selection.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::text::Line;

use crate::core::content::Record;
use crate::ui::delegate::{render_record, Treatment, SLOT_GAP, SLOT_HEIGHT};
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct ListBrowser {
    items: Vec<Record>,
    selected: Option<usize>,
    width: usize,
    height: usize,
}

impl ListBrowser {
    /// Build a browser over `records`, keeping `previous` selection when it
    /// still fits and clamping it to the last record otherwise.
    pub fn build(records: &[Record], width: usize, height: usize, previous: Option<usize>) -> Self {
        let selected = if records.is_empty() {
            None
        } else {
            Some(previous.unwrap_or(0).min(records.len() - 1))
        };
        Self {
            items: records.to_vec(),
            selected,
            width,
            height,
        }
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Move the cursor by `delta`, stopping at the first and last record.
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(current) = self.selected {
            let last = self.items.len().saturating_sub(1);
            let target = current.saturating_add_signed(delta).min(last);
            self.selected = Some(target);
        }
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    pub fn slots_per_page(&self) -> usize {
        ((self.height + SLOT_GAP) / (SLOT_HEIGHT + SLOT_GAP)).max(1)
    }

    /// Indices of the records currently on screen.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        match self.selected {
            Some(selected) => {
                let per_page = self.slots_per_page();
                let start = selected / per_page * per_page;
                start..(start + per_page).min(self.items.len())
            }
            None => 0..0,
        }
    }

    pub fn render(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height);
        let range = self.visible_range();
        let first = range.start;
        for index in range {
            if index > first {
                lines.extend(std::iter::repeat_n(Line::default(), SLOT_GAP));
            }
            let treatment = if Some(index) == self.selected {
                Treatment::Selected
            } else {
                Treatment::Normal
            };
            let mut slot = render_record(&self.items[index], self.width, treatment, theme);
            slot.truncate(SLOT_HEIGHT);
            slot.resize(SLOT_HEIGHT, Line::default());
            lines.extend(slot);
        }
        lines.truncate(self.height);
        lines
    }

    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let page = self.slots_per_page() as isize;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp | KeyCode::Char('b') | KeyCode::Char('u') => {
                self.move_selection(-page)
            }
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char('d') => {
                self.move_selection(page)
            }
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => return false,
        }
        true
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.move_selection(-1),
            MouseEventKind::ScrollDown => self.move_selection(1),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ProjectRecord;
    use ratatui::crossterm::event::KeyModifiers;

    fn projects(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                Record::Project(ProjectRecord {
                    name: format!("Project {i}"),
                    date_range: "2024".to_string(),
                    bullets: vec![format!("Did thing {i}")],
                })
            })
            .collect()
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn build_selects_first_record() {
        let browser = ListBrowser::build(&projects(3), 40, 20, None);
        assert_eq!(browser.selected(), Some(0));
    }

    #[test]
    fn build_clamps_previous_selection() {
        let browser = ListBrowser::build(&projects(3), 40, 20, Some(7));
        assert_eq!(browser.selected(), Some(2));
        let kept = ListBrowser::build(&projects(3), 40, 20, Some(1));
        assert_eq!(kept.selected(), Some(1));
    }

    #[test]
    fn selection_stops_at_bounds() {
        let mut browser = ListBrowser::build(&projects(3), 40, 20, None);
        browser.move_selection(-1);
        assert_eq!(browser.selected(), Some(0));
        browser.move_selection(10);
        assert_eq!(browser.selected(), Some(2));
        browser.move_selection(1);
        assert_eq!(browser.selected(), Some(2));
        browser.move_selection(isize::MIN);
        assert_eq!(browser.selected(), Some(0));
    }

    #[test]
    fn empty_list_has_no_selection_and_renders_nothing() {
        let mut browser = ListBrowser::build(&[], 40, 20, Some(3));
        assert_eq!(browser.selected(), None);
        browser.move_selection(1);
        browser.select_last();
        assert!(browser.handle_key(&key(KeyCode::Down)));
        assert_eq!(browser.selected(), None);
        assert!(browser.render(&Theme::dark_default()).is_empty());
    }

    #[test]
    fn window_follows_selection_by_page() {
        // Nine lines hold two four-line slots and the gap between them.
        let mut browser = ListBrowser::build(&projects(5), 40, 9, None);
        assert_eq!(browser.slots_per_page(), 2);
        assert_eq!(browser.visible_range(), 0..2);

        let theme = Theme::dark_default();
        let lines = browser.render(&theme);
        assert_eq!(lines.len(), 9);
        assert!(text_of(&lines[0]).contains("Project 0"));
        assert!(text_of(&lines[5]).contains("Project 1"));

        for _ in 0..4 {
            browser.handle_key(&key(KeyCode::Down));
        }
        assert_eq!(browser.selected(), Some(4));
        assert_eq!(browser.visible_range(), 4..5);
        let lines = browser.render(&theme);
        assert!(text_of(&lines[0]).starts_with("│ Project 4"));
    }

    #[test]
    fn slots_have_fixed_height() {
        let mut records = projects(2);
        records[0] = Record::Project(ProjectRecord {
            name: "Verbose".to_string(),
            date_range: "2024".to_string(),
            bullets: (0..6).map(|i| format!("bullet {i}")).collect(),
        });
        let browser = ListBrowser::build(&records, 40, 30, None);
        let lines = browser.render(&Theme::dark_default());
        // Slot, gap, slot.
        assert_eq!(lines.len(), SLOT_HEIGHT * 2 + SLOT_GAP);
        assert!(text_of(&lines[SLOT_HEIGHT + SLOT_GAP]).contains("Project 1"));
    }

    #[test]
    fn tiny_viewport_still_shows_one_slot_clipped() {
        let browser = ListBrowser::build(&projects(3), 40, 1, None);
        assert_eq!(browser.slots_per_page(), 1);
        assert_eq!(browser.render(&Theme::dark_default()).len(), 1);
    }

    #[test]
    fn paging_and_jump_keys() {
        let mut browser = ListBrowser::build(&projects(6), 40, 9, None);
        browser.handle_key(&key(KeyCode::PageDown));
        assert_eq!(browser.selected(), Some(2));
        browser.handle_key(&key(KeyCode::Char('G')));
        assert_eq!(browser.selected(), Some(5));
        browser.handle_key(&key(KeyCode::Char('b')));
        assert_eq!(browser.selected(), Some(3));
        browser.handle_key(&key(KeyCode::Home));
        assert_eq!(browser.selected(), Some(0));
        assert!(!browser.handle_key(&key(KeyCode::Char('x'))));
    }
}

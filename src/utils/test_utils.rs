use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use crate::core::app::{App, SessionEvent};
use crate::core::content::{ContactLine, ContentRegistry, EducationRecord, Record, Section};
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;

pub fn create_test_app() -> App {
    App::new(Arc::new(ContentRegistry::builtin()), Theme::dark_default())
}

pub fn create_app_with(registry: ContentRegistry) -> App {
    App::new(Arc::new(registry), Theme::dark_default())
}

/// Registry with one education record and a contact section.
pub fn education_and_contact() -> ContentRegistry {
    ContentRegistry::new(
        "Test - SSH Portfolio",
        "Test - Portfolio",
        vec![
            Section::new(
                "Education",
                vec![Record::Education(EducationRecord {
                    school: "Test School".to_string(),
                    status: "Senior".to_string(),
                    date_range: "Present".to_string(),
                    details: vec!["Coursework: Compilers".to_string()],
                })],
            ),
            Section::new(
                "Contact",
                vec![
                    Record::Contact(ContactLine {
                        text: "Test Person".to_string(),
                    }),
                    Record::Contact(ContactLine {
                        text: "test@example.com".to_string(),
                    }),
                ],
            ),
        ],
    )
    .expect("valid registry")
}

pub fn press(code: KeyCode) -> SessionEvent {
    SessionEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Move a fresh app past the splash screen at the given size.
pub fn enter_main(app: &mut App, width: u16, height: u16) {
    app.handle_event(SessionEvent::Resize { width, height });
    app.handle_event(SessionEvent::SplashElapsed);
}

pub fn render_app(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

/// Rows of a buffer as plain strings, trailing blanks removed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

//! Per-record formatting.
//!
//! Each record variant becomes a bold title line, a muted subtitle where the
//! variant has one, and a wrapped detail block. The match over [`Record`] is
//! exhaustive, so a new variant fails to compile here instead of rendering
//! nothing.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::content::Record;
use crate::ui::theme::Theme;
use crate::utils::wrap::{indent_lines, wrap_line};

/// Lines reserved for every record in a list, whatever its length.
pub const SLOT_HEIGHT: usize = 4;
/// Blank lines between consecutive slots.
pub const SLOT_GAP: usize = 1;

/// Columns taken by the selection bar or the plain indent in front of a record.
pub const GUTTER_WIDTH: usize = 2;
const DETAIL_INDENT: usize = 1;
const SKILL_DETAIL_INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Normal,
    Selected,
}

/// Render a record as a list entry: gutter plus formatted content, wrapped to `width`.
pub fn render_record(
    record: &Record,
    width: usize,
    treatment: Treatment,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(GUTTER_WIDTH);
    record_lines(record, inner, theme)
        .into_iter()
        .map(|line| {
            let gutter = match treatment {
                Treatment::Selected => vec![
                    Span::styled("│", theme.selection_bar_style),
                    Span::raw(" "),
                ],
                Treatment::Normal => vec![Span::raw("  ")],
            };
            let style = line.style;
            let mut spans = gutter;
            spans.extend(line.spans);
            Line::from(spans).style(style)
        })
        .collect()
}

/// Formatted record content without any selection chrome.
pub fn record_lines(record: &Record, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    match record {
        Record::Education(e) => {
            let mut lines = title(&e.school, width, theme);
            lines.extend(subtitle(&[&e.status, &e.date_range], width, theme));
            lines.extend(detail_block(
                e.details.iter().map(String::as_str),
                "",
                DETAIL_INDENT,
                width,
                theme.item_detail_style,
            ));
            lines
        }
        Record::Experience(e) => {
            let heading = if e.role.is_empty() {
                e.company.clone()
            } else {
                format!("{} — {}", e.company, e.role)
            };
            let mut lines = title(&heading, width, theme);
            lines.extend(subtitle(&[&e.date_range, &e.location], width, theme));
            lines.extend(detail_block(
                e.bullets.iter().map(String::as_str),
                "• ",
                DETAIL_INDENT,
                width,
                theme.item_detail_style,
            ));
            lines
        }
        Record::Project(p) => {
            let mut lines = title(&p.name, width, theme);
            lines.extend(subtitle(&[&p.date_range], width, theme));
            lines.extend(detail_block(
                p.bullets.iter().map(String::as_str),
                "• ",
                DETAIL_INDENT,
                width,
                theme.item_detail_style,
            ));
            lines
        }
        Record::Skills(s) => {
            let mut lines = title(&s.category, width, theme);
            lines.extend(detail_block(
                s.details.iter().map(String::as_str),
                "- ",
                SKILL_DETAIL_INDENT,
                width,
                theme.item_detail_style,
            ));
            lines
        }
        Record::Contact(c) => vec![centered(&c.text, width, theme.contact_style)],
    }
}

/// Every record's content in sequence with a blank line between records.
/// Used for sections shown as one continuous document.
pub fn document_lines(records: &[Record], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(record_lines(record, width, theme));
    }
    lines
}

fn title(text: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    wrap_line(
        &Line::from(Span::styled(text.to_string(), theme.item_title_style)),
        width,
    )
}

fn subtitle(parts: &[&str], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let text = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" • ");
    if text.is_empty() {
        return Vec::new();
    }
    wrap_line(
        &Line::from(Span::styled(text, theme.item_subtitle_style)),
        width,
    )
}

fn detail_block<'a>(
    entries: impl Iterator<Item = &'a str>,
    marker: &str,
    indent: usize,
    width: usize,
    style: Style,
) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(indent);
    let mut lines = Vec::new();
    for entry in entries {
        let line = Line::from(Span::styled(format!("{marker}{entry}"), style));
        lines.extend(indent_lines(wrap_line(&line, wrap_width), indent));
    }
    lines
}

fn centered(text: &str, width: usize, style: Style) -> Line<'static> {
    let pad = width.saturating_sub(text.width()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{
        ContactLine, EducationRecord, ExperienceRecord, ProjectRecord, RecordKind, SkillsRecord,
    };

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample(kind: RecordKind) -> Record {
        match kind {
            RecordKind::Education => Record::Education(EducationRecord {
                school: "State College".to_string(),
                status: "Junior".to_string(),
                date_range: "Present".to_string(),
                details: vec!["Coursework: Algorithms".to_string()],
            }),
            RecordKind::Experience => Record::Experience(ExperienceRecord {
                company: "Acme".to_string(),
                date_range: "2024".to_string(),
                role: "Intern".to_string(),
                location: "Remote".to_string(),
                reporting_line: "Reported to the CTO".to_string(),
                bullets: vec!["Shipped things".to_string()],
            }),
            RecordKind::Project => Record::Project(ProjectRecord {
                name: "Widget".to_string(),
                date_range: "2023".to_string(),
                bullets: vec!["Built a widget".to_string()],
            }),
            RecordKind::Skills => Record::Skills(SkillsRecord {
                category: "Languages".to_string(),
                details: vec!["Rust".to_string(), "Go".to_string()],
            }),
            RecordKind::Contact => Record::Contact(ContactLine {
                text: "me@example.com".to_string(),
            }),
        }
    }

    #[test]
    fn every_record_kind_renders_content() {
        let theme = Theme::dark_default();
        for kind in RecordKind::ALL {
            let record = sample(kind);
            assert_eq!(record.kind(), kind);
            let lines = record_lines(&record, 40, &theme);
            assert!(!lines.is_empty(), "{kind:?} rendered nothing");
            assert!(lines.iter().all(|l| l.width() <= 40));
        }
    }

    #[test]
    fn experience_has_title_subtitle_and_bullets() {
        let theme = Theme::dark_default();
        let lines = record_lines(&sample(RecordKind::Experience), 60, &theme);
        assert_eq!(text_of(&lines[0]), "Acme — Intern");
        assert_eq!(lines[0].spans[0].style, theme.item_title_style);
        assert_eq!(text_of(&lines[1]), "2024 • Remote");
        assert_eq!(lines[1].spans[0].style, theme.item_subtitle_style);
        assert_eq!(text_of(&lines[2]), " • Shipped things");
    }

    #[test]
    fn skills_use_dashes_without_subtitle() {
        let theme = Theme::dark_default();
        let lines = record_lines(&sample(RecordKind::Skills), 60, &theme);
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts, vec!["Languages", "  - Rust", "  - Go"]);
    }

    #[test]
    fn selected_treatment_adds_accent_bar() {
        let theme = Theme::dark_default();
        let record = sample(RecordKind::Project);
        let selected = render_record(&record, 40, Treatment::Selected, &theme);
        let normal = render_record(&record, 40, Treatment::Normal, &theme);
        assert_eq!(selected.len(), normal.len());
        assert!(selected.iter().all(|l| text_of(l).starts_with("│ ")));
        assert_eq!(selected[0].spans[0].style, theme.selection_bar_style);
        assert!(normal.iter().all(|l| text_of(l).starts_with("  ")));
    }

    #[test]
    fn long_bullets_wrap_within_width() {
        let theme = Theme::dark_default();
        let record = Record::Project(ProjectRecord {
            name: "Long".to_string(),
            date_range: String::new(),
            bullets: vec!["word ".repeat(20)],
        });
        let lines = render_record(&record, 24, Treatment::Selected, &theme);
        assert!(lines.len() > SLOT_HEIGHT);
        assert!(lines.iter().all(|l| l.width() <= 24));
    }

    #[test]
    fn document_separates_records_with_blank_lines() {
        let theme = Theme::dark_default();
        let records = vec![sample(RecordKind::Skills), sample(RecordKind::Skills)];
        let lines = document_lines(&records, 40, &theme);
        assert_eq!(lines.len(), 7);
        assert_eq!(text_of(&lines[3]), "");
    }

    #[test]
    fn zero_width_does_not_panic() {
        let theme = Theme::dark_default();
        for kind in RecordKind::ALL {
            let _ = render_record(&sample(kind), 0, Treatment::Selected, &theme);
        }
    }
}

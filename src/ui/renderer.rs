use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::app::{App, ContentComponent, Screen};
use crate::core::content::Record;
use crate::ui::layout::{header_text_lines, HEADER_LEFT_PADDING, HEADER_TOP_PADDING};
use crate::ui::static_block::centered_block;

pub const INITIALIZING_TEXT: &str = "Initializing...";
pub const HELP_TEXT: &str = "←/→ or h/l: switch • ↑/↓: navigate • q: quit";
const TAB_DIVIDER: &str = " | ";
const RULE: &str = "─";

pub fn ui(f: &mut Frame, app: &App) {
    let nav = app.nav();
    if !nav.size_known {
        f.render_widget(Paragraph::new(INITIALIZING_TEXT), f.area());
        return;
    }

    // Geometry comes from the last report; never draw outside the real frame.
    let area = Rect::new(0, 0, nav.width, nav.height).intersection(f.area());
    match nav.screen {
        Screen::Splash => render_splash(f, app, area),
        Screen::Main => render_main(f, app, area),
    }
}

fn render_splash(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let line = Line::from(vec![
        Span::styled(app.spinner().frame(), theme.spinner_style),
        Span::styled(
            format!(" {}", app.registry().splash_title()),
            theme.splash_text_style,
        ),
    ]);
    // Padded by a blank line above and below when the terminal has room.
    let lines = if area.height >= 3 {
        vec![Line::default(), line, Line::default()]
    } else {
        vec![line]
    };
    let height = (lines.len() as u16).min(area.height);
    let block = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    };
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        block,
    );
}

fn render_main(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let layout = app.layout();
    let areas = layout.areas(area);

    let mut header: Vec<Line> = vec![Line::default(); HEADER_TOP_PADDING as usize];
    let indent = " ".repeat(HEADER_LEFT_PADDING as usize);
    header.extend(
        header_text_lines(app.registry().title(), app.nav().width)
            .into_iter()
            .map(|text| Line::styled(format!("{indent}{text}"), theme.header_style)),
    );
    f.render_widget(Paragraph::new(header), areas.header);

    f.render_widget(Paragraph::new(tab_bar(app)), areas.tabs);

    f.render_widget(
        Paragraph::new(Line::styled(
            RULE.repeat(area.width as usize),
            theme.rule_style,
        )),
        areas.rule,
    );

    f.render_widget(Paragraph::new(content_lines(app)), areas.content);

    f.render_widget(
        Paragraph::new(Line::styled(format!(" {HELP_TEXT} "), theme.help_style)),
        areas.help,
    );
}

fn tab_bar(app: &App) -> Line<'static> {
    let theme = app.theme();
    let active = app.nav().active_tab;
    let mut spans = Vec::new();
    for (i, name) in app.registry().names().enumerate() {
        if i > 0 {
            spans.push(Span::styled(TAB_DIVIDER, theme.tab_divider_style));
        }
        let style = if i == active {
            theme.tab_active_style
        } else {
            theme.tab_inactive_style
        };
        spans.push(Span::styled(format!(" {}. {} ", i + 1, name), style));
    }
    Line::from(spans)
}

fn content_lines(app: &App) -> Vec<Line<'static>> {
    let layout = app.layout();
    match app.component() {
        ContentComponent::List(list) => list.render(app.theme()),
        ContentComponent::Document(viewport) => viewport.render(),
        ContentComponent::Static => {
            let texts: Vec<&str> = app
                .active_section()
                .map(|section| {
                    section
                        .records
                        .iter()
                        .filter_map(|record| match record {
                            Record::Contact(contact) => Some(contact.text.as_str()),
                            _ => None,
                        })
                        .collect()
                })
                .unwrap_or_default();
            centered_block(
                &texts,
                layout.content_width as usize,
                layout.content_height as usize,
                app.theme().contact_style,
            )
        }
    }
}

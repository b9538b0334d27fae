use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Chrome
    pub header_style: Style,
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,
    pub tab_divider_style: Style,
    pub rule_style: Style,
    pub help_style: Style,

    // Splash
    pub spinner_style: Style,
    pub splash_text_style: Style,

    // Records
    pub item_title_style: Style,
    pub item_subtitle_style: Style,
    pub item_detail_style: Style,
    pub selection_bar_style: Style,
    pub contact_style: Style,
}

pub const THEME_NAMES: [&str; 3] = ["dark", "light", "monochrome"];

impl Theme {
    pub fn dark_default() -> Self {
        let accent = Color::Indexed(78);
        let muted = Color::Indexed(248);
        Theme {
            header_style: Style::default()
                .fg(Color::Indexed(213))
                .add_modifier(Modifier::BOLD),
            tab_active_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            tab_inactive_style: Style::default().fg(muted),
            tab_divider_style: Style::default().fg(muted),
            rule_style: Style::default().fg(muted),
            help_style: Style::default().fg(Color::Indexed(241)),

            spinner_style: Style::default().fg(accent),
            splash_text_style: Style::default().fg(muted),

            item_title_style: Style::default().add_modifier(Modifier::BOLD),
            item_subtitle_style: Style::default().add_modifier(Modifier::DIM),
            item_detail_style: Style::default(),
            selection_bar_style: Style::default().fg(accent),
            contact_style: Style::default(),
        }
    }

    pub fn light() -> Self {
        let accent = Color::Indexed(28);
        let muted = Color::Indexed(244);
        Theme {
            header_style: Style::default()
                .fg(Color::Indexed(127))
                .add_modifier(Modifier::BOLD),
            tab_active_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            tab_inactive_style: Style::default().fg(muted),
            tab_divider_style: Style::default().fg(muted),
            rule_style: Style::default().fg(muted),
            help_style: Style::default().fg(Color::Indexed(246)),

            spinner_style: Style::default().fg(accent),
            splash_text_style: Style::default().fg(Color::Indexed(240)),

            item_title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            item_subtitle_style: Style::default().fg(Color::Indexed(242)),
            item_detail_style: Style::default().fg(Color::Black),
            selection_bar_style: Style::default().fg(accent),
            contact_style: Style::default().fg(Color::Black),
        }
    }

    /// No colours at all; only modifiers distinguish regions.
    pub fn monochrome() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);
        Theme {
            header_style: bold,
            tab_active_style: bold.add_modifier(Modifier::UNDERLINED),
            tab_inactive_style: Style::default(),
            tab_divider_style: dim,
            rule_style: dim,
            help_style: dim,

            spinner_style: bold,
            splash_text_style: Style::default(),

            item_title_style: bold,
            item_subtitle_style: dim,
            item_detail_style: Style::default(),
            selection_bar_style: bold,
            contact_style: Style::default(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark_default()),
            "light" => Some(Self::light()),
            "monochrome" | "mono" => Some(Self::monochrome()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in THEME_NAMES {
            assert!(Theme::from_name(name).is_some(), "{name} should resolve");
        }
        assert_eq!(Theme::from_name(" Dark "), Some(Theme::dark_default()));
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn active_tab_stands_out() {
        for name in THEME_NAMES {
            let theme = Theme::from_name(name).expect("theme");
            assert_ne!(theme.tab_active_style, theme.tab_inactive_style);
        }
    }
}

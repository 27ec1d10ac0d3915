use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 18, 24);
    pub const BG_ELEVATED: Color = Color::Rgb(34, 36, 48);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 94);
    pub const TEXT_PRIMARY: Color = Color::Rgb(224, 226, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 165, 185);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 130);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(110, 210, 130);
    pub const ACCENT_ROSE: Color = Color::Rgb(230, 120, 140);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default()
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn option_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn option_selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_correct() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_wrong() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn question_answered() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn question_pending() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}

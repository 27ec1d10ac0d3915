use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg_style = Style::default().bg(Theme::BG_ELEVATED);
    let view = state.session.current();

    let mut spans = vec![
        Span::styled(
            " ? ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.session.deck().title.clone(),
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ ",
            Style::default()
                .fg(Theme::BORDER_DIM)
                .bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            format!("Question {} of {}", view.cursor + 1, view.total),
            Style::default()
                .fg(Theme::TEXT_SECONDARY)
                .bg(Theme::BG_ELEVATED),
        ),
    ];

    if state.submitted {
        spans.push(Span::styled(
            " │ ",
            Style::default()
                .fg(Theme::BORDER_DIM)
                .bg(Theme::BG_ELEVATED),
        ));
        spans.push(Span::styled(
            "submitted",
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}

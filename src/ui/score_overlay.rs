use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// The notification surface: a centered modal presenting the submitted
/// score. Dismissing it leaves the session reviewable.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref card) = state.score_card else {
        return;
    };

    let width = 46.min(area.width);
    let height = 9.min(area.height);
    let rect = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(" Results ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_DARK));

    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let pct = card.result.percent();
    let score_color = if pct >= 80 {
        Theme::ACCENT_GREEN
    } else if pct >= 40 {
        Theme::ACCENT_AMBER
    } else {
        Theme::ACCENT_ROSE
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", card.result.correct, card.result.total, pct),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Submitted at {}", card.submitted_at),
            Style::default().fg(Theme::TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "esc review | r retake | q quit",
            Style::default().fg(Theme::TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Session ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let answered = state.session.answered_count();
    let total = state.session.len();

    let mut items: Vec<ListItem> = vec![
        ListItem::new(Span::styled(
            format!(" Answered  {}/{}", answered, total),
            Style::default().fg(Theme::TEXT_SECONDARY),
        )),
        ListItem::new(Span::styled(
            format!(" Remaining {}", total - answered),
            Style::default().fg(Theme::TEXT_SECONDARY),
        )),
    ];

    match state.last_score {
        Some(score) => items.push(ListItem::new(Span::styled(
            format!(
                " Score     {}/{} ({}%)",
                score.correct,
                score.total,
                score.percent()
            ),
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ))),
        None => items.push(ListItem::new(Span::styled(
            " Not submitted yet",
            Style::default().fg(Theme::TEXT_MUTED),
        ))),
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

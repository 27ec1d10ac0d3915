use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::QuestionList;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Questions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner_width = area.width.saturating_sub(2) as usize;
    // " ◆ Q12 " prefix before the prompt snippet
    let text_budget = inner_width.saturating_sub(8);

    let cursor = state.session.cursor();
    let items: Vec<ListItem> = state
        .session
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selection = state.session.selection(i);
            let answered = selection.is_some();

            // Before submit: answered / pending. After: right / wrong, with
            // unanswered counting as wrong.
            let (indicator, style) = if state.submitted {
                if selection == Some(q.correct) {
                    ("✓", Theme::question_answered())
                } else {
                    ("✘", Style::default().fg(Theme::ACCENT_ROSE))
                }
            } else if answered {
                ("◆", Theme::question_answered())
            } else {
                ("◇", Theme::question_pending())
            };

            let row_style = if i == cursor {
                style.add_modifier(Modifier::BOLD).bg(Theme::BG_ELEVATED)
            } else {
                style
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", indicator), style),
                Span::styled(
                    format!("Q{} ", i + 1),
                    row_style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(crate::ui::fit_to_width(&q.prompt, text_budget), row_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Prompt ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = state.session.current();

    let mut lines = vec![
        Line::from(Span::styled(view.question.prompt.clone(), Theme::prompt_text())),
        Line::from(""),
    ];

    match view.selected {
        Some(i) => lines.push(Line::from(Span::styled(
            format!("Answered: option {}", i + 1),
            Style::default().fg(Theme::TEXT_MUTED).add_modifier(Modifier::ITALIC),
        ))),
        None => lines.push(Line::from(Span::styled(
            "No answer recorded yet",
            Style::default().fg(Theme::TEXT_MUTED).add_modifier(Modifier::ITALIC),
        ))),
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

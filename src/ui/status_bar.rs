use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINT: &str = "←/→ question | ↑/↓ option | enter select | s submit | q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.session.deck().title),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let focus_name = match state.focus {
        FocusPanel::Options => "OPTIONS",
        FocusPanel::QuestionList => "QUESTIONS",
    };

    // Pad so the hint and the focus indicator sit on the right edge
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let tail = KEY_HINT.len() + focus_name.len() + 4;
    let remaining = (area.width as usize).saturating_sub(used + tail);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    parts.push(Span::styled(
        format!("{} ", KEY_HINT),
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    ));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Options;
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
        .title(" Options ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = state.session.current();
    // " ● 1. " prefix plus a possible verdict suffix after submit
    let text_budget = (inner.width as usize).saturating_sub(9);

    let items: Vec<ListItem> = view
        .question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = view.selected == Some(i);
            let is_highlight = i == state.option_cursor;

            let marker = if is_selected { "●" } else { "○" };
            let marker_style = if is_selected {
                Theme::option_selected()
            } else {
                Style::default().fg(Theme::TEXT_MUTED)
            };

            let mut text_style = if is_selected {
                Theme::option_selected()
            } else {
                Theme::option_text()
            };
            if is_highlight {
                text_style = text_style
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(format!(" {} ", marker), marker_style),
                Span::styled(
                    format!("{}. {}", i + 1, crate::ui::fit_to_width(option, text_budget)),
                    text_style,
                ),
            ];

            // Review markers once a score has been submitted
            if state.submitted {
                if i == view.question.correct {
                    spans.push(Span::styled(" ✓", Theme::option_correct()));
                } else if is_selected {
                    spans.push(Span::styled(" ✘", Theme::option_wrong()));
                }
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items);
    frame.render_widget(list, inner);
}

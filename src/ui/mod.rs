mod header_bar;
mod layout;
mod options_panel;
mod prompt_panel;
mod question_list;
mod score_overlay;
mod session_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_question_list);

    if state.config.ui.show_question_list {
        question_list::render(frame, app_layout.question_list, state);
        session_panel::render(frame, app_layout.session_panel, state);
    }
    header_bar::render(frame, app_layout.header_bar, state);
    prompt_panel::render(frame, app_layout.prompt_area, state);
    options_panel::render(frame, app_layout.options_area, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlay last so it draws on top of everything
    if state.score_card.is_some() {
        score_overlay::render(frame, area, state);
    }
}

/// Truncate `text` to at most `max` terminal columns, ending in an ellipsis
/// when anything was cut. Width-aware so wide characters don't overflow the
/// pane.
pub(crate) fn fit_to_width(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

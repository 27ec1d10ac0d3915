use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub question_list: Rect,
    pub session_panel: Rect,
    pub header_bar: Rect,
    pub prompt_area: Rect,
    pub options_area: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_question_list: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: left panel | gap | right content
    let (left_panel, right_panel) = if show_question_list {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([
                Constraint::Length(26), // Left panel
                Constraint::Min(30),    // Right content
            ])
            .split(content);
        (h_chunks[0], h_chunks[1])
    } else {
        (Rect::new(content.x, content.y, 0, 0), content)
    };

    // Left panel: question overview | session summary
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Question overview
            Constraint::Length(6), // Session summary
        ])
        .split(left_panel);

    let question_list = left_chunks[0];
    let session_panel = left_chunks[1];

    // Right panel: header | prompt | options
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Header bar
            Constraint::Percentage(35), // Prompt
            Constraint::Min(5),         // Options
        ])
        .split(right_panel);

    let header_bar = right_chunks[0];
    let prompt_area = right_chunks[1];
    let options_area = right_chunks[2];

    AppLayout {
        question_list,
        session_panel,
        header_bar,
        prompt_area,
        options_area,
        status_bar,
    }
}

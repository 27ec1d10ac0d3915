use std::time::Instant;

use crate::config::AppConfig;
use crate::quiz::engine::QuizSession;
use crate::quiz::model::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    QuestionList,
    Options,
}

/// A submitted score together with when it was submitted, for the overlay.
#[derive(Debug, Clone)]
pub struct ScoreCard {
    pub result: ScoreResult,
    pub submitted_at: String,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: QuizSession,
    /// Highlighted option row. Renderer state: which row the keyboard is on,
    /// distinct from which option is recorded in the session.
    pub option_cursor: usize,
    pub focus: FocusPanel,
    /// Score overlay; captures all input while visible.
    pub score_card: Option<ScoreCard>,
    pub submitted: bool,
    pub last_score: Option<ScoreResult>,
    pub status_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig, session: QuizSession) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            session,
            option_cursor: 0,
            focus: FocusPanel::Options,
            score_card: None,
            submitted: false,
            last_score: None,
            status_message: None,
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some((text, Instant::now()));
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        if !self.config.ui.show_question_list {
            return;
        }
        self.focus = match self.focus {
            FocusPanel::Options => FocusPanel::QuestionList,
            FocusPanel::QuestionList => FocusPanel::Options,
        };
        self.dirty = true;
    }

    /// Put the option highlight on the recorded selection for the current
    /// question, or the first option when unanswered.
    pub fn sync_option_cursor(&mut self) {
        self.option_cursor = self.session.current().selected.unwrap_or(0);
    }

    /// Start the session over on the same deck: selections gone, cursor at
    /// the first question, score artifacts cleared.
    pub fn restart(&mut self) {
        self.session.reset();
        self.option_cursor = 0;
        self.score_card = None;
        self.submitted = false;
        self.last_score = None;
        self.set_status("Session restarted".to_string());
    }

    pub fn status_line(&self) -> String {
        if let Some((msg, _)) = &self.status_message {
            return msg.clone();
        }
        let mut s = format!(
            "Answered {}/{}",
            self.session.answered_count(),
            self.session.len()
        );
        if let Some(score) = self.last_score {
            s.push_str(&format!(
                " | Score {}/{} ({}%)",
                score.correct,
                score.total,
                score.percent()
            ));
        }
        s
    }
}

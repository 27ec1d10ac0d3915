use std::time::Duration;

use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, FocusPanel, ScoreCard};

/// How long a transient status message stays on the status bar.
const STATUS_TTL: Duration = Duration::from_secs(4);

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    if let Some((_, since)) = &state.status_message {
        if since.elapsed() > STATUS_TTL {
            state.status_message = None;
            state.dirty = true;
        }
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => vec![],
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Score overlay captures all input when visible
    if state.score_card.is_some() {
        return handle_overlay_key(state, key);
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('s') => submit(state),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            goto_prev(state);
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            goto_next(state);
            vec![]
        }
        _ => match state.focus {
            FocusPanel::Options => handle_options_key(state, key),
            FocusPanel::QuestionList => handle_list_key(state, key),
        },
    }
}

fn handle_options_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let option_count = state.session.current().question.options.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.option_cursor = state.option_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.option_cursor + 1 < option_count {
                state.option_cursor += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            select_option(state, state.option_cursor);
        }
        // Quick-select by number: `1` is the first option. Out-of-range
        // digits go through the engine so the rejection path is exercised.
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let index = c as usize - '1' as usize;
            select_option(state, index);
        }
        _ => {}
    }
    vec![]
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => goto_prev(state),
        KeyCode::Down | KeyCode::Char('j') => goto_next(state),
        KeyCode::Enter => {
            state.focus = FocusPanel::Options;
        }
        _ => {}
    }
    vec![]
}

fn handle_overlay_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.score_card = None;
        }
        KeyCode::Char('r') => {
            state.restart();
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn select_option(state: &mut AppState, index: usize) {
    if state.submitted && state.config.behavior.lock_answers_after_submit {
        state.set_status("Answers are locked after submit".to_string());
        return;
    }
    match state.session.select(index) {
        Ok(view) => {
            state.option_cursor = index;
            tracing::debug!(question = view.cursor, option = index, "selection recorded");
        }
        Err(e) => {
            tracing::warn!(error = %e, "selection rejected");
            state.set_status(format!("No option {}", index + 1));
        }
    }
}

fn goto_next(state: &mut AppState) {
    state.session.next();
    state.sync_option_cursor();
}

fn goto_prev(state: &mut AppState) {
    state.session.prev();
    state.sync_option_cursor();
}

fn submit(state: &mut AppState) -> Vec<Action> {
    let result = state.session.score();
    state.submitted = true;
    state.last_score = Some(result);
    state.score_card = Some(ScoreCard {
        result,
        submitted_at: Local::now().format(&state.timestamp_format).to_string(),
    });
    vec![Action::ScoreSubmitted { result }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::engine::QuizSession;
    use crate::quiz::model::{Deck, Question, ScoreResult};

    fn two_question_deck() -> Deck {
        let q = |correct: usize| Question {
            prompt: "p".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        };
        Deck {
            title: "test".into(),
            questions: vec![q(1), q(2)],
        }
    }

    fn test_state() -> AppState {
        let session = QuizSession::new(two_question_deck()).unwrap();
        AppState::new(AppConfig::default(), session)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(state, AppEvent::Terminal(CEvent::Key(KeyEvent::from(code))))
    }

    #[test]
    fn enter_records_the_highlighted_option() {
        let mut state = test_state();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.session.current().selected, Some(1));
        assert_eq!(state.session.cursor(), 0);
    }

    #[test]
    fn digits_quick_select() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.session.current().selected, Some(2));
        assert_eq!(state.option_cursor, 2);
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('9'));
        assert_eq!(state.session.current().selected, None);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn navigation_moves_the_highlight_to_the_recorded_answer() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Right);
        assert_eq!(state.session.cursor(), 1);
        assert_eq!(state.option_cursor, 0);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.session.cursor(), 0);
        assert_eq!(state.option_cursor, 1);
    }

    #[test]
    fn navigation_saturates_at_the_bounds() {
        let mut state = test_state();
        press(&mut state, KeyCode::Left);
        assert_eq!(state.session.cursor(), 0);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.session.cursor(), 1);
    }

    #[test]
    fn submit_emits_a_score_action_and_opens_the_overlay() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('1'));
        let actions = press(&mut state, KeyCode::Char('s'));
        match actions.as_slice() {
            [Action::ScoreSubmitted { result }] => {
                assert_eq!(*result, ScoreResult { correct: 1, total: 2 });
            }
            other => panic!("unexpected actions: {:?}", other),
        }
        assert!(state.score_card.is_some());
        assert!(state.submitted);
    }

    #[test]
    fn overlay_captures_input_and_escape_dismisses_it() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('s'));
        // Navigation keys must not reach the session while the overlay is up
        press(&mut state, KeyCode::Right);
        assert_eq!(state.session.cursor(), 0);
        press(&mut state, KeyCode::Esc);
        assert!(state.score_card.is_none());
    }

    #[test]
    fn reselection_stays_legal_after_submit_by_default() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.session.current().selected, Some(1));
    }

    #[test]
    fn lock_after_submit_turns_reselection_into_a_no_op() {
        let mut state = test_state();
        state.config.behavior.lock_answers_after_submit = true;
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.session.current().selected, None);
        // Navigation stays available for review
        press(&mut state, KeyCode::Right);
        assert_eq!(state.session.cursor(), 1);
    }

    #[test]
    fn retake_resets_the_session() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('r'));
        assert!(state.score_card.is_none());
        assert!(!state.submitted);
        assert_eq!(state.session.answered_count(), 0);
        assert_eq!(state.session.cursor(), 0);
    }
}

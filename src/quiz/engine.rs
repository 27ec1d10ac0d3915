//! The quiz session state machine.
//!
//! A [`QuizSession`] owns the deck, the cursor (which question is shown),
//! and the selection map. All state mutation goes through its methods; the
//! renderer only ever sees the [`QuestionView`] snapshots they return.
//! Scoring is pure and never locks the session: navigation and re-selection
//! stay legal after [`QuizSession::score`].

use std::collections::HashMap;

use thiserror::Error;

use crate::quiz::model::{Deck, Question, ScoreResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// `select` was called with an index outside the current question's
    /// option range. The session is left unchanged.
    #[error("option {index} is out of range for a question with {options} options")]
    InvalidSelection { index: usize, options: usize },

    /// A session cannot start on a deck with no questions.
    #[error("a quiz session needs at least one question")]
    EmptyDeck,
}

/// Everything a renderer needs to draw the current question: the question
/// itself, which option (if any) is selected, and position metadata.
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub selected: Option<usize>,
    pub cursor: usize,
    pub total: usize,
}

#[derive(Debug)]
pub struct QuizSession {
    deck: Deck,
    cursor: usize,
    selections: HashMap<usize, usize>,
}

impl QuizSession {
    /// Start a session at the first question with no selections recorded.
    pub fn new(deck: Deck) -> Result<Self, QuizError> {
        if deck.questions.is_empty() {
            return Err(QuizError::EmptyDeck);
        }
        Ok(Self {
            deck,
            cursor: 0,
            selections: HashMap::new(),
        })
    }

    /// View of the current question. Always well-defined: the cursor never
    /// leaves `[0, len)`.
    pub fn current(&self) -> QuestionView<'_> {
        QuestionView {
            question: &self.deck.questions[self.cursor],
            selected: self.selections.get(&self.cursor).copied(),
            cursor: self.cursor,
            total: self.deck.questions.len(),
        }
    }

    /// Record `option` as the answer to the current question, overwriting
    /// any earlier selection. Does not move the cursor.
    pub fn select(&mut self, option: usize) -> Result<QuestionView<'_>, QuizError> {
        let options = self.deck.questions[self.cursor].options.len();
        if option >= options {
            return Err(QuizError::InvalidSelection {
                index: option,
                options,
            });
        }
        self.selections.insert(self.cursor, option);
        Ok(self.current())
    }

    /// Move to the next question. Saturates at the last question rather
    /// than wrapping or failing.
    pub fn next(&mut self) -> QuestionView<'_> {
        if self.cursor + 1 < self.deck.questions.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Move to the previous question, saturating at the first.
    pub fn prev(&mut self) -> QuestionView<'_> {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Count the questions whose recorded selection matches the correct
    /// option. Pure: mutates neither cursor nor selections, so repeated
    /// calls yield the same result.
    pub fn score(&self) -> ScoreResult {
        let correct = self
            .deck
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.selections.get(i) == Some(&q.correct))
            .count();
        ScoreResult {
            correct,
            total: self.deck.questions.len(),
        }
    }

    /// Discard all selections and return to the first question, keeping
    /// the deck. Used for retakes.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.selections.clear();
    }

    pub fn len(&self) -> usize {
        self.deck.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.questions.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn questions(&self) -> &[Question] {
        &self.deck.questions
    }

    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selections.get(&index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(specs: &[(usize, usize)]) -> Deck {
        // (option_count, correct) per question
        Deck {
            title: "test".into(),
            questions: specs
                .iter()
                .enumerate()
                .map(|(i, &(count, correct))| Question {
                    prompt: format!("question {}", i),
                    options: (0..count).map(|o| format!("option {}", o)).collect(),
                    correct,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = QuizSession::new(deck(&[])).unwrap_err();
        assert_eq!(err, QuizError::EmptyDeck);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = QuizSession::new(deck(&[(4, 0), (4, 1), (4, 2)])).unwrap();
        // Arbitrary walk, heavy on the boundaries
        for _ in 0..5 {
            s.prev();
        }
        assert_eq!(s.cursor(), 0);
        for _ in 0..10 {
            s.next();
        }
        assert_eq!(s.cursor(), 2);
        s.prev();
        s.next();
        s.next();
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut s = QuizSession::new(deck(&[(2, 0), (2, 1)])).unwrap();
        assert_eq!(s.prev().cursor, 0);
        s.next();
        assert_eq!(s.next().cursor, 1);
    }

    #[test]
    fn select_reports_in_view_and_keeps_cursor() {
        let mut s = QuizSession::new(deck(&[(4, 1), (4, 2)])).unwrap();
        s.select(3).unwrap();
        let view = s.current();
        assert_eq!(view.selected, Some(3));
        assert_eq!(view.cursor, 0);
        assert_eq!(view.total, 2);
    }

    #[test]
    fn reselection_overwrites() {
        let mut s = QuizSession::new(deck(&[(4, 2)])).unwrap();
        s.select(0).unwrap();
        s.select(2).unwrap();
        assert_eq!(s.current().selected, Some(2));
        assert_eq!(s.score(), ScoreResult { correct: 1, total: 1 });
    }

    #[test]
    fn invalid_selection_leaves_state_unchanged() {
        let mut s = QuizSession::new(deck(&[(4, 1)])).unwrap();
        s.select(1).unwrap();
        let err = s.select(4).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidSelection {
                index: 4,
                options: 4
            }
        );
        assert_eq!(s.current().selected, Some(1));
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let mut s = QuizSession::new(deck(&[(4, 0), (4, 1), (4, 2)])).unwrap();
        s.select(0).unwrap();
        assert_eq!(s.score(), ScoreResult { correct: 1, total: 3 });
    }

    #[test]
    fn score_is_idempotent() {
        let mut s = QuizSession::new(deck(&[(4, 1), (4, 2)])).unwrap();
        s.select(1).unwrap();
        let first = s.score();
        assert_eq!(first, s.score());
        assert_eq!(first, ScoreResult { correct: 1, total: 2 });
        // Scoring must not have moved the cursor or touched selections
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.current().selected, Some(1));
    }

    #[test]
    fn scoring_never_locks_the_session() {
        let mut s = QuizSession::new(deck(&[(4, 0), (4, 1)])).unwrap();
        s.score();
        s.next();
        s.select(1).unwrap();
        assert_eq!(s.score(), ScoreResult { correct: 1, total: 2 });
    }

    #[test]
    fn end_to_end_example() {
        // Two questions with four options each, correct = 1 and 2.
        let mut s = QuizSession::new(deck(&[(4, 1), (4, 2)])).unwrap();
        s.select(1).unwrap();
        s.next();
        s.select(0).unwrap();
        assert_eq!(s.score(), ScoreResult { correct: 1, total: 2 });
    }

    #[test]
    fn reset_clears_selections_and_cursor() {
        let mut s = QuizSession::new(deck(&[(4, 1), (4, 2)])).unwrap();
        s.select(1).unwrap();
        s.next();
        s.select(2).unwrap();
        s.reset();
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.answered_count(), 0);
        assert_eq!(s.score(), ScoreResult { correct: 0, total: 2 });
    }
}

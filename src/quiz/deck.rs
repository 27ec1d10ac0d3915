//! Deck acquisition: the built-in sample deck, TOML deck files, and the
//! validation applied to anything crossing that boundary.
//!
//! A deck file looks like:
//!
//! ```toml
//! title = "General Knowledge"
//!
//! [[questions]]
//! prompt = "What is 2 + 2?"
//! options = ["3", "4", "5", "6"]
//! correct = 1
//! ```
//!
//! `correct` is a 0-based index into `options`.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::quiz::model::{Deck, Question};

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("deck has no questions")]
    Empty,

    #[error("question {number} has {count} options, need at least 2")]
    TooFewOptions { number: usize, count: usize },

    #[error("question {number} marks option {correct} correct but only has {count} options")]
    CorrectOutOfRange {
        number: usize,
        correct: usize,
        count: usize,
    },
}

/// Load and validate a deck from a TOML file.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let deck: Deck = toml::from_str(&contents).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&deck)?;
    Ok(deck)
}

/// Check the structural invariants every question must hold: at least two
/// options, and a correct index that points at one of them. Question numbers
/// in errors are 1-based to match how decks read in an editor.
pub fn validate(deck: &Deck) -> Result<(), DeckError> {
    if deck.questions.is_empty() {
        return Err(DeckError::Empty);
    }
    for (i, q) in deck.questions.iter().enumerate() {
        let count = q.options.len();
        if count < 2 {
            return Err(DeckError::TooFewOptions {
                number: i + 1,
                count,
            });
        }
        if q.correct >= count {
            return Err(DeckError::CorrectOutOfRange {
                number: i + 1,
                correct: q.correct,
                count,
            });
        }
    }
    Ok(())
}

/// Reorder the questions once, before a session starts. The session itself
/// always sees a fixed order.
pub fn shuffle_questions(deck: &mut Deck) {
    deck.questions.shuffle(&mut rand::rng());
}

/// The deck shipped with the binary, used when no deck file is given.
pub fn sample_deck() -> Deck {
    fn q(prompt: &str, options: &[&str], correct: usize) -> Question {
        Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }

    Deck {
        title: "General Knowledge".to_string(),
        questions: vec![
            q("What is 2 + 2?", &["3", "4", "5", "6"], 1),
            q(
                "What is the capital of France?",
                &["Berlin", "Madrid", "Paris", "Rome"],
                2,
            ),
            q(
                "Which planet is known as the Red Planet?",
                &["Venus", "Mars", "Jupiter", "Saturn"],
                1,
            ),
            q(
                "How many continents are there?",
                &["Five", "Six", "Seven", "Eight"],
                2,
            ),
            q(
                "Which is the largest ocean?",
                &["Atlantic", "Indian", "Arctic", "Pacific"],
                3,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_deck_file() {
        let deck: Deck = toml::from_str(
            r#"
            title = "Parsing"

            [[questions]]
            prompt = "What is 2 + 2?"
            options = ["3", "4"]
            correct = 1
            "#,
        )
        .unwrap();
        assert_eq!(deck.title, "Parsing");
        assert_eq!(deck.questions.len(), 1);
        assert_eq!(deck.questions[0].correct, 1);
        validate(&deck).unwrap();
    }

    #[test]
    fn title_defaults_when_missing() {
        let deck: Deck = toml::from_str(
            r#"
            [[questions]]
            prompt = "p"
            options = ["a", "b"]
            correct = 0
            "#,
        )
        .unwrap();
        assert_eq!(deck.title, "Untitled deck");
    }

    #[test]
    fn empty_deck_fails_validation() {
        let deck: Deck = toml::from_str("title = \"empty\"").unwrap();
        assert!(matches!(validate(&deck), Err(DeckError::Empty)));
    }

    #[test]
    fn single_option_fails_validation() {
        let deck: Deck = toml::from_str(
            r#"
            [[questions]]
            prompt = "p"
            options = ["only"]
            correct = 0
            "#,
        )
        .unwrap();
        assert!(matches!(
            validate(&deck),
            Err(DeckError::TooFewOptions { number: 1, count: 1 })
        ));
    }

    #[test]
    fn out_of_range_correct_index_fails_validation() {
        let deck: Deck = toml::from_str(
            r#"
            [[questions]]
            prompt = "p"
            options = ["a", "b"]
            correct = 2
            "#,
        )
        .unwrap();
        assert!(matches!(
            validate(&deck),
            Err(DeckError::CorrectOutOfRange {
                number: 1,
                correct: 2,
                count: 2
            })
        ));
    }

    #[test]
    fn sample_deck_is_valid() {
        validate(&sample_deck()).unwrap();
    }

    #[test]
    fn shuffle_keeps_every_question() {
        let mut deck = sample_deck();
        let before = deck.questions.len();
        shuffle_questions(&mut deck);
        assert_eq!(deck.questions.len(), before);
        validate(&deck).unwrap();
    }
}

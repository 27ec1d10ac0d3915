use serde::Deserialize;

/// One quiz item: a prompt, its ordered options, and the index of the
/// correct option. Option indices are the identity of an option; there are
/// no separate option ids.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// An ordered set of questions, fixed for the lifetime of a session.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

fn default_title() -> String {
    "Untitled deck".to_string()
}

/// Outcome of scoring a session. Unanswered questions count as incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
}

impl ScoreResult {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 / self.total) as u32
    }
}

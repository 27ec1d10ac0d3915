use crate::quiz::model::ScoreResult;

/// Effects the main loop performs after the handler has mutated state.
#[derive(Debug)]
pub enum Action {
    ScoreSubmitted { result: ScoreResult },
    Quit,
}

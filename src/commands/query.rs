//! Filter and suggest commands
//!
//! Replays a feedback history supplied on the command line and reports what
//! is left and what to guess next.

use crate::core::{Feedback, FeedbackError, History};
use crate::solver::{CandidateSet, Solver, Suggestion};

/// Candidates and suggestions after a history
pub struct QueryResult {
    pub history: History,
    pub candidates: CandidateSet,
    pub suggestions: Vec<Suggestion>,
}

/// Parse `guess:pattern` entries in order
///
/// # Errors
///
/// Returns the first entry that is not a valid guess and pattern.
pub fn parse_history<S: AsRef<str>>(entries: &[S]) -> Result<History, FeedbackError> {
    entries
        .iter()
        .map(|entry| entry.as_ref().parse::<Feedback>())
        .collect()
}

/// Filter the answers by `history` and rank the next guesses
///
/// `top_n` of zero skips ranking.
#[must_use]
pub fn run_query(solver: &Solver<'_>, history: History, top_n: usize) -> QueryResult {
    let candidates = solver.candidates(&history);
    let suggestions = solver.suggestions(&candidates, top_n);

    QueryResult {
        history,
        candidates,
        suggestions,
    }
}

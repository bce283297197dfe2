//! Game session state as a value
//!
//! A `Session` bundles the feedback history, the candidates it leaves and the
//! keyboard letter states. Confirming a guess returns a new session; the old
//! one is untouched, so undo is just keeping the previous value.

use crate::core::{Feedback, History, LetterStates, Word};
use crate::solver::{CandidateSet, Solver, Suggestion};

/// Standard number of rows on a Wordle board
pub const MAX_GUESSES: usize = 6;

/// Snapshot of one game in progress
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    history: History,
    candidates: CandidateSet,
    letters: LetterStates,
}

impl Session {
    /// Fresh game: no guesses, every possible answer is a candidate
    #[must_use]
    pub fn new(answers: &[Word]) -> Self {
        Self {
            history: History::new(),
            candidates: CandidateSet::new(answers.iter().copied()),
            letters: LetterStates::new(),
        }
    }

    /// Confirm one guess and its feedback
    ///
    /// # Examples
    /// ```
    /// use wordlex::core::{Word, score_words};
    /// use wordlex::session::Session;
    ///
    /// let answers: Vec<Word> = ["crane", "slate", "trace", "react"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let start = Session::new(&answers);
    /// let next = start.apply(score_words("crane", "trace").unwrap());
    ///
    /// assert_eq!(start.candidates().len(), 4);
    /// assert_eq!(next.candidates().len(), 1);
    /// assert_eq!(next.turn(), 1);
    /// ```
    #[must_use]
    pub fn apply(&self, feedback: Feedback) -> Self {
        Self {
            history: self.history.with(feedback),
            candidates: self.candidates.narrow(&feedback),
            letters: self.letters.with(&feedback),
        }
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStates {
        &self.letters
    }

    /// Number of confirmed guesses
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    /// Whether the last confirmed guess was all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(Feedback::is_solved)
    }

    /// Whether the feedback so far rules out every known answer
    ///
    /// Either a color was entered wrongly or the answer is outside the
    /// vocabulary. Not an error; callers should offer undo.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether the standard board is full without a solve
    #[must_use]
    pub fn is_out_of_guesses(&self) -> bool {
        !self.is_solved() && self.turn() >= MAX_GUESSES
    }

    /// Ranked suggestions for the current candidates
    #[must_use]
    pub fn suggestions(&self, solver: &Solver<'_>, top_n: usize) -> Vec<Suggestion> {
        solver.suggestions(&self.candidates, top_n)
    }
}

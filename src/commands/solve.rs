//! Word solving command
//!
//! Plays a game against a known answer, always taking the solver's best
//! guess, and records each step.

use crate::core::{Feedback, Pattern, Word};
use crate::session::{MAX_GUESSES, Session};
use crate::solver::Solver;
use crate::solver::entropy::calculate_metrics;
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    /// Forced opening guess instead of the solver's choice
    pub first_guess: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
            first_guess: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target or forced first guess is not a valid word
/// - The target is not one of the solver's possible answers
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult> {
    let target = Word::new(&config.target).context("Invalid target word")?;
    if !solver.answer_words().contains(&target) {
        bail!("'{target}' is not in the answer list");
    }

    let mut forced = config
        .first_guess
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("Invalid first guess")?;

    let mut session = Session::new(solver.answer_words());
    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.candidates().len();

        let Some(guess) = forced.take().or_else(|| solver.best_guess(session.candidates())) else {
            break;
        };

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, session.candidates().as_slice());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = Feedback::score(guess, &target);
        session = session.apply(feedback);

        guesses.push(GuessStep {
            word: guess.to_string(),
            pattern: feedback.pattern(),
            candidates_before,
            candidates_after: session.candidates().len(),
            entropy,
            expected_remaining,
        });

        if session.is_solved() {
            break;
        }
    }

    Ok(SolveResult {
        success: session.is_solved(),
        guesses,
        target: target.to_string(),
    })
}

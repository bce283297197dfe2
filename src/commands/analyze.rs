//! Word analysis command
//!
//! Analyzes the entropy and partition of a specific guess against the
//! candidates left by a history.

use crate::core::{History, Pattern, Word};
use crate::solver::Solver;
use crate::solver::entropy::partition;
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Feedback buckets, largest first
    pub partitions: Vec<(Pattern, usize)>,
}

/// Analyze the entropy of a word against the current candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the allowed word list
pub fn analyze_word(word: &str, solver: &Solver<'_>, history: &History) -> Result<AnalysisResult> {
    let guess = Word::new(word)?;

    if !solver.all_words().contains(&guess) {
        bail!("Word '{guess}' not in word list");
    }

    let candidates = solver.candidates(history);
    let parts = partition(&guess, candidates.as_slice());

    let total_candidates = candidates.len();
    let entropy = if total_candidates <= 1 { 0.0 } else { parts.entropy() };
    let expected_reduction = entropy.exp2();

    Ok(AnalysisResult {
        word: guess.to_string(),
        entropy,
        expected_reduction,
        expected_remaining: parts.expected_remaining(),
        max_partition: parts.max_bucket(),
        total_candidates,
        partitions: parts.sorted(),
    })
}

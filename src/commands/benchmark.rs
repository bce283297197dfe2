//! Benchmark command
//!
//! Plays the solver against many answers and collects the guess distribution.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::session::MAX_GUESSES;
use crate::solver::Solver;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Answers not found within the guess limit
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the answer list
///
/// Takes the first `count` answers, or a random sample of `count` when
/// `random` is set.
#[must_use]
pub fn sample_targets(answers: &[Word], count: usize, random: bool) -> Vec<Word> {
    if random {
        answers
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect()
    } else {
        answers.iter().take(count).copied().collect()
    }
}

/// Run benchmark on a set of target words
///
/// If `forced_first` is provided, it is used as the first guess instead of
/// letting the solver choose.
///
/// # Errors
///
/// Returns an error if a target is not one of the solver's answers or the
/// forced first guess is not a valid word.
pub fn run_benchmark(
    solver: &Solver<'_>,
    target_words: &[Word],
    forced_first: Option<&str>,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed_words = Vec::new();

    for target in target_words {
        let mut config = SolveConfig::new(target.to_string());
        config.max_guesses = MAX_GUESSES;
        config.first_guess = forced_first.map(str::to_string);

        let result = solve_word(config, solver)?;
        let guesses = result.guesses.len();

        if result.success {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed_words.push(result.target);
        }

        let solved = distribution.values().sum::<usize>();
        if solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = target_words.len();
    let solved = total_words - failed_words.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failed_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

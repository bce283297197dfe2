//! Entropy-based guess ranking
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions
//! and the ranking of guesses built on it.

mod calculator;
mod ranker;

pub use calculator::{
    GuessMetrics, PartitionMap, calculate_entropy, calculate_metrics, partition, shannon_entropy,
};
pub use ranker::{Ranker, Suggestion, rank, select_best_guess};

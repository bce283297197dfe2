//! Entropy-based guess ranking
//!
//! Scores every word in a guess pool by expected information and returns the
//! best ones. Scores are computed in parallel and sorted afterwards, so the
//! output never depends on which thread finished first.

use super::calculator::{PartitionMap, calculate_entropy, partition};
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// A guess with its expected information gain in bits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub score: f64,
}

impl Suggestion {
    /// Ranking order: higher score first, then alphabetical
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Sort by [`Suggestion::rank_cmp`], drop repeated words and keep `top_n`
fn finish(mut scored: Vec<Suggestion>, top_n: usize) -> Vec<Suggestion> {
    scored.sort_unstable_by(Suggestion::rank_cmp);
    scored.dedup_by_key(|s| s.word);
    scored.truncate(top_n);
    scored
}

/// Rank guesses by expected information against the candidates
///
/// Every word in `guess_pool` is scored, whether or not it could itself be
/// the answer. Results are sorted by descending entropy with ties broken
/// alphabetically, then truncated to `top_n`. An empty pool or an empty
/// candidate set gives an empty list.
///
/// # Examples
/// ```
/// use wordlex::core::Word;
/// use wordlex::solver::entropy::rank;
///
/// let words: Vec<Word> = ["aaaaa", "aeros", "slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let ranked = rank(&words, &words[2..], 2);
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked[0].score >= ranked[1].score);
/// ```
#[must_use]
pub fn rank(guess_pool: &[Word], candidates: &[Word], top_n: usize) -> Vec<Suggestion> {
    if guess_pool.is_empty() || candidates.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let scored = guess_pool
        .par_iter()
        .map(|&word| Suggestion {
            word,
            score: calculate_entropy(&word, candidates),
        })
        .collect();

    finish(scored, top_n)
}

/// Select the single highest-entropy guess
///
/// Returns `None` if the guess pool or the candidate set is empty.
#[must_use]
pub fn select_best_guess(guess_pool: &[Word], candidates: &[Word]) -> Option<Suggestion> {
    rank(guess_pool, candidates, 1).into_iter().next()
}

/// Ranker that remembers partitions across calls
///
/// Partitions are keyed by guess for one candidate snapshot. Ranking against
/// any other candidate set discards them first, so a cached partition is
/// never reused for a set it was not computed from. Results are identical to
/// [`rank`].
#[derive(Debug, Default)]
pub struct Ranker {
    snapshot: Vec<Word>,
    partitions: FxHashMap<Word, PartitionMap>,
}

impl Ranker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of partitions held for the current snapshot
    #[must_use]
    pub fn cached(&self) -> usize {
        self.partitions.len()
    }

    fn sync_snapshot(&mut self, candidates: &[Word]) {
        if self.snapshot != candidates {
            self.partitions.clear();
            self.snapshot = candidates.to_vec();
        }
    }

    /// Partition for one guess, computed once per snapshot
    pub fn partition(&mut self, guess: &Word, candidates: &[Word]) -> &PartitionMap {
        self.sync_snapshot(candidates);
        let snapshot = &self.snapshot;
        self.partitions
            .entry(*guess)
            .or_insert_with(|| partition(guess, snapshot))
    }

    /// Same contract as [`rank`], reusing partitions from earlier calls
    pub fn rank(
        &mut self,
        guess_pool: &[Word],
        candidates: &[Word],
        top_n: usize,
    ) -> Vec<Suggestion> {
        if guess_pool.is_empty() || candidates.is_empty() || top_n == 0 {
            return Vec::new();
        }

        self.sync_snapshot(candidates);

        let mut seen = FxHashSet::default();
        let missing: Vec<Word> = guess_pool
            .iter()
            .filter(|w| !self.partitions.contains_key(*w) && seen.insert(**w))
            .copied()
            .collect();

        let snapshot = &self.snapshot;
        let computed: Vec<(Word, PartitionMap)> = missing
            .into_par_iter()
            .map(|word| (word, partition(&word, snapshot)))
            .collect();
        self.partitions.extend(computed);

        let single = candidates.len() <= 1;
        let scored = guess_pool
            .iter()
            .filter_map(|word| {
                let parts = self.partitions.get(word)?;
                let score = if single { 0.0 } else { parts.entropy() };
                Some(Suggestion { word: *word, score })
            })
            .collect();

        finish(scored, top_n)
    }
}

//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes how the candidates split by
//! feedback pattern and the expected information gain of that split.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback patterns the guess can produce
    pub buckets: usize,
}

/// Candidates grouped by the feedback a guess would receive from each
///
/// Counts always sum to the number of candidates partitioned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionMap {
    counts: FxHashMap<Pattern, usize>,
    total: usize,
}

impl PartitionMap {
    /// Number of candidates producing `pattern`
    #[must_use]
    pub fn get(&self, pattern: Pattern) -> usize {
        self.counts.get(&pattern).copied().unwrap_or(0)
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of candidates partitioned
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pattern, usize)> + '_ {
        self.counts.iter().map(|(&pattern, &count)| (pattern, count))
    }

    /// Buckets largest first, ties by pattern value
    #[must_use]
    pub fn sorted(&self) -> Vec<(Pattern, usize)> {
        let mut buckets: Vec<_> = self.iter().collect();
        buckets.sort_unstable_by(|(p1, c1), (p2, c2)| c2.cmp(c1).then(p1.cmp(p2)));
        buckets
    }

    /// Buckets keyed by canonical pattern text, e.g. `("-YG-G", 3)`
    #[must_use]
    pub fn keyed(&self) -> Vec<(String, usize)> {
        self.sorted()
            .into_iter()
            .map(|(pattern, count)| (pattern.key(), count))
            .collect()
    }

    /// Shannon entropy of the split in bits
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self.counts.values().copied())
    }

    /// Largest bucket (worst-case remaining candidates)
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Expected size of the bucket the answer falls into
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.counts
            .values()
            .map(|&count| count as f64 * count as f64 / total)
            .sum()
    }
}

/// Group candidates by the pattern they produce with the guess
///
/// # Examples
/// ```
/// use wordlex::core::{Pattern, Word};
/// use wordlex::solver::entropy::partition;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates: Vec<Word> = ["trace", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let parts = partition(&guess, &candidates);
/// assert_eq!(parts.total(), 3);
/// assert_eq!(parts.get(Pattern::parse("YGG-G").unwrap()), 1);
/// ```
#[must_use]
pub fn partition(guess: &Word, candidates: &[Word]) -> PartitionMap {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(Pattern::calculate(guess, candidate)).or_insert(0) += 1;
    }

    PartitionMap {
        counts,
        total: candidates.len(),
    }
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits: 0 for zero or one
/// candidate, never more than log₂(n) for n candidates.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordlex::core::Word;
/// use wordlex::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    partition(guess, candidates).entropy()
}

/// Calculate Shannon entropy from bucket sizes
///
/// H = -Σ p * log₂(p)
///
/// Counts are summed smallest first, so the result depends only on the
/// multiset of sizes and not on the order they are supplied in. Two guesses
/// that split the candidates identically therefore score bit-for-bit equal.
///
/// # Examples
/// ```
/// use wordlex::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([5, 3, 2]);
/// assert!((entropy - 1.485).abs() < 0.001);
/// ```
#[must_use]
pub fn shannon_entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut counts: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts.sort_unstable();
    let entropy: f64 = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single bucket gives -1 * log2(1) = -0.0; rounding can push a uniform
    // split a few ulps past log2(n)
    if entropy <= 0.0 {
        0.0
    } else {
        entropy.min(total.log2())
    }
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    let parts = partition(guess, candidates);

    GuessMetrics {
        entropy: if candidates.len() <= 1 { 0.0 } else { parts.entropy() },
        expected_remaining: parts.expected_remaining(),
        max_partition: parts.max_bucket(),
        buckets: parts.len(),
    }
}

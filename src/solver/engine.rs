//! Main Wordle solver interface

use super::candidates::CandidateSet;
use super::entropy::{Ranker, Suggestion, rank};
use super::pool::GuessPool;
use crate::core::{History, Word};

/// Main Wordle solver
///
/// Holds the two vocabularies and the pool choice; all game state is passed
/// in as a [`History`] or [`CandidateSet`].
pub struct Solver<'a> {
    pool: GuessPool,
    all_words: &'a [Word],
    answer_words: &'a [Word],
}

impl<'a> Solver<'a> {
    /// Create a new solver with the given pool and word lists
    ///
    /// # Parameters
    /// - `pool`: Which words are scored as guesses
    /// - `all_words`: All valid guessable words
    /// - `answer_words`: Subset of words that can be answers
    #[must_use]
    pub const fn new(pool: GuessPool, all_words: &'a [Word], answer_words: &'a [Word]) -> Self {
        Self {
            pool,
            all_words,
            answer_words,
        }
    }

    #[must_use]
    pub const fn pool(&self) -> GuessPool {
        self.pool
    }

    #[must_use]
    pub const fn answer_words(&self) -> &'a [Word] {
        self.answer_words
    }

    #[must_use]
    pub const fn all_words(&self) -> &'a [Word] {
        self.all_words
    }

    /// Starting candidate set: every possible answer
    #[must_use]
    pub fn initial_candidates(&self) -> CandidateSet {
        CandidateSet::new(self.answer_words.iter().copied())
    }

    /// Possible answers consistent with the history
    #[must_use]
    pub fn candidates(&self, history: &History) -> CandidateSet {
        self.initial_candidates().filter(history)
    }

    /// Words scored as guesses for the given candidates
    #[must_use]
    pub fn guess_pool<'b>(&self, candidates: &'b CandidateSet) -> &'b [Word]
    where
        'a: 'b,
    {
        match self.pool {
            GuessPool::Candidates => candidates.as_slice(),
            GuessPool::Answers => self.answer_words,
            GuessPool::Allowed => self.all_words,
        }
    }

    /// Top `top_n` guesses against the candidates
    #[must_use]
    pub fn suggestions(&self, candidates: &CandidateSet, top_n: usize) -> Vec<Suggestion> {
        rank(self.guess_pool(candidates), candidates.as_slice(), top_n)
    }

    /// Same as [`Self::suggestions`], reusing partitions held by `ranker`
    pub fn suggestions_cached(
        &self,
        ranker: &mut Ranker,
        candidates: &CandidateSet,
        top_n: usize,
    ) -> Vec<Suggestion> {
        ranker.rank(self.guess_pool(candidates), candidates.as_slice(), top_n)
    }

    /// Best guess for the candidates
    ///
    /// A lone candidate is returned directly. Among equally informative
    /// guesses, one that could still be the answer is preferred.
    /// Returns `None` if no candidates remain.
    #[must_use]
    pub fn best_guess(&self, candidates: &CandidateSet) -> Option<Word> {
        if let Some(&only) = candidates.solution() {
            return Some(only);
        }
        Self::pick(candidates, &self.suggestions(candidates, usize::MAX))
    }

    /// Best guess from a complete ranking of the guess pool
    #[must_use]
    pub fn pick(candidates: &CandidateSet, ranked: &[Suggestion]) -> Option<Word> {
        if let Some(&only) = candidates.solution() {
            return Some(only);
        }

        let top = ranked.first()?;
        ranked
            .iter()
            .take_while(|s| s.score.total_cmp(&top.score).is_eq())
            .find(|s| candidates.contains(&s.word))
            .or(Some(top))
            .map(|s| s.word)
    }

    /// Get the next best guess given previous guesses and patterns
    ///
    /// Returns `None` if no candidates remain.
    #[must_use]
    pub fn next_guess(&self, history: &History) -> Option<Word> {
        self.best_guess(&self.candidates(history))
    }
}

//! Candidate set value type

use super::filter::filter;
use crate::core::{Feedback, History, Word};
use rustc_hash::FxHashSet;

/// Words still consistent with every feedback seen so far
///
/// Built once from the possible-answer vocabulary, then only ever replaced by
/// narrower sets. Duplicates are dropped on construction, keeping the first
/// occurrence, so the order of the source list is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    #[must_use]
    pub fn new<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut seen = FxHashSet::default();
        let words = words.into_iter().filter(|w| seen.insert(*w)).collect();
        Self { words }
    }

    /// Narrow by a whole history
    #[must_use]
    pub fn filter(&self, history: &History) -> Self {
        Self {
            words: filter(&self.words, history),
        }
    }

    /// Narrow by a single new feedback entry
    #[must_use]
    pub fn narrow(&self, feedback: &Feedback) -> Self {
        Self {
            words: self
                .words
                .iter()
                .filter(|w| feedback.matches(w))
                .copied()
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The answer, once exactly one candidate is left
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

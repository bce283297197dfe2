//! Word lists for Wordle solving
//!
//! The engine never reads files itself; this module is the loading side used
//! by the command line front end.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Default location of the possible-answer list
pub const DEFAULT_ANSWERS_PATH: &str = "data/possible_words.txt";

/// Default location of the allowed-guess list
pub const DEFAULT_ALLOWED_PATH: &str = "data/allowed_words.txt";

/// The two word lists a game is played with
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Every word accepted as a guess; always includes every answer
    pub allowed: Vec<Word>,
    /// Words that can be the hidden answer
    pub answers: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, adding any answer missing from the allowed list
    #[must_use]
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Self {
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let allowed = allowed
            .into_iter()
            .chain(answers.iter().copied())
            .filter(|w| seen.insert(*w))
            .collect();

        Self { allowed, answers }
    }

    /// Load both lists from disk
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file cannot be read.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(allowed: P, answers: Q) -> io::Result<Self> {
        Ok(Self::new(
            loader::load_from_file(allowed)?,
            loader::load_from_file(answers)?,
        ))
    }

    /// Look up a word in the allowed list
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}

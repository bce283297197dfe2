//! Core domain types for Wordle
//!
//! The scorer lives here: words, per-letter outcomes, patterns and feedback.
//! Everything in this module is pure and has no external dependencies.

mod feedback;
mod history;
mod letters;
mod outcome;
mod pattern;
mod word;

pub use feedback::{Feedback, FeedbackError, canonical_key, score_words};
pub use history::History;
pub use letters::LetterStates;
pub use outcome::Outcome;
pub use pattern::{PATTERN_COUNT, Pattern, PatternError};
pub use word::{WORD_LENGTH, Word, WordError};

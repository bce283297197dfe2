//! Keyboard letter state
//!
//! Each letter shows the best outcome it has received in any guess. States
//! only move up the `Absent < Present < Correct` order, never back down.

use super::feedback::Feedback;
use super::outcome::Outcome;

/// Display state for every letter of the alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStates([Option<Outcome>; 26]);

impl LetterStates {
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 26])
    }

    /// Fold one feedback into a new set of states
    #[must_use]
    pub fn with(mut self, feedback: &Feedback) -> Self {
        for (&letter, outcome) in feedback.guess().letters().iter().zip(feedback.outcomes()) {
            let slot = &mut self.0[usize::from(letter - b'a')];
            *slot = (*slot).max(Some(outcome));
        }
        self
    }

    /// Fold a whole sequence of feedback
    #[must_use]
    pub fn from_feedback<'a, I>(feedback: I) -> Self
    where
        I: IntoIterator<Item = &'a Feedback>,
    {
        feedback.into_iter().fold(Self::new(), Self::with)
    }

    /// State of a lowercase letter, `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Outcome> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter - b'a')]
        } else {
            None
        }
    }

    /// Letters with a known state, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Outcome)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter())
            .filter_map(|(letter, state)| state.map(|s| (char::from(letter), s)))
    }
}

//! Feedback for one confirmed guess
//!
//! A `Feedback` pairs a guess with the pattern it received. The pattern alone
//! is meaningless; it only constrains candidates relative to its guess.

use super::outcome::Outcome;
use super::pattern::{Pattern, PatternError};
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// A guess together with the feedback it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: Word,
    pattern: Pattern,
}

/// Error type for feedback built from raw caller input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Word(WordError),
    Pattern(PatternError),
    /// Entry text was not of the form `guess:pattern`
    MissingSeparator(String),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "Invalid guess: {e}"),
            Self::Pattern(e) => write!(f, "Invalid feedback: {e}"),
            Self::MissingSeparator(entry) => {
                write!(f, "Expected 'guess:pattern' (e.g. crane:-YG-G), got '{entry}'")
            }
        }
    }
}

impl std::error::Error for FeedbackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Pattern(e) => Some(e),
            Self::MissingSeparator(_) => None,
        }
    }
}

impl From<WordError> for FeedbackError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<PatternError> for FeedbackError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl Feedback {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Score `guess` against a known `answer`
    #[must_use]
    pub fn score(guess: Word, answer: &Word) -> Self {
        Self::new(guess, Pattern::calculate(&guess, answer))
    }

    /// Build feedback from a per-position outcome sequence
    ///
    /// # Errors
    /// Returns `PatternError::InvalidLength` if `outcomes` does not have
    /// exactly one entry per letter.
    pub fn from_outcomes(guess: Word, outcomes: &[Outcome]) -> Result<Self, PatternError> {
        let outcomes: &[Outcome; WORD_LENGTH] = outcomes
            .try_into()
            .map_err(|_| PatternError::InvalidLength(outcomes.len()))?;
        Ok(Self::new(guess, Pattern::from_outcomes(outcomes)))
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    #[must_use]
    pub fn outcomes(&self) -> [Outcome; WORD_LENGTH] {
        self.pattern.outcomes()
    }

    /// Whether the guess was the answer
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.pattern.is_perfect()
    }

    /// Check whether `word`, taken as the hidden answer, reproduces this feedback
    ///
    /// # Examples
    /// ```
    /// use wordlex::core::{Feedback, Word};
    ///
    /// let answer = Word::new("trace").unwrap();
    /// let feedback = Feedback::score(Word::new("crane").unwrap(), &answer);
    ///
    /// assert!(feedback.matches(&answer));
    /// assert!(!feedback.matches(&Word::new("slate").unwrap()));
    /// ```
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        Pattern::calculate(&self.guess, word) == self.pattern
    }
}

/// Parses `guess:pattern`, e.g. `crane:-YG-G` or `crane:⬜🟨🟩⬜🟩`
impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, pattern) = s
            .split_once(':')
            .or_else(|| s.split_once('='))
            .ok_or_else(|| FeedbackError::MissingSeparator(s.to_string()))?;

        Ok(Self::new(Word::new(guess.trim())?, Pattern::parse(pattern)?))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}

/// Score two raw strings
///
/// This is the validating entry point for callers holding plain text: both
/// inputs must be exactly [`WORD_LENGTH`] ASCII letters.
///
/// # Errors
/// Returns the `WordError` of the first malformed input.
///
/// # Examples
/// ```
/// use wordlex::core::{score_words, Outcome};
///
/// let feedback = score_words("crane", "trace").unwrap();
/// assert_eq!(feedback.outcomes()[0], Outcome::Present);
///
/// assert!(score_words("cranes", "trace").is_err());
/// ```
pub fn score_words(guess: &str, answer: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(Feedback::score(guess, &answer))
}

/// Canonical map key of a feedback's outcome sequence
///
/// Two feedbacks share a key exactly when their outcome sequences are equal.
#[must_use]
pub fn canonical_key(feedback: &Feedback) -> String {
    feedback.pattern().key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Outcome::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn score_produces_one_outcome_per_letter() {
        let feedback = Feedback::score(word("crane"), &word("trace"));
        assert_eq!(feedback.outcomes().len(), WORD_LENGTH);
        assert_eq!(feedback.guess(), &word("crane"));
    }

    #[test]
    fn answer_matches_its_own_feedback() {
        let words = ["crane", "slate", "speed", "abide", "geese", "eerie", "robot"];
        for g in words {
            for a in words {
                let feedback = Feedback::score(word(g), &word(a));
                assert!(feedback.matches(&word(a)), "{a} should match {feedback}");
            }
        }
    }

    #[test]
    fn from_outcomes_matches_scored_feedback() {
        let scored = Feedback::score(word("crane"), &word("react"));
        let manual = Feedback::from_outcomes(
            word("crane"),
            &[Present, Present, Correct, Absent, Present],
        )
        .unwrap();
        assert_eq!(scored, manual);
    }

    #[test]
    fn from_outcomes_rejects_wrong_length() {
        let result = Feedback::from_outcomes(word("crane"), &[Correct, Correct]);
        assert_eq!(result, Err(PatternError::InvalidLength(2)));
    }

    #[test]
    fn score_words_rejects_malformed_input() {
        assert_eq!(
            score_words("cranes", "trace"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            score_words("crane", "tr4ce"),
            Err(WordError::InvalidCharacters)
        );
        assert_eq!(
            score_words(" crane", "trace"),
            Err(WordError::InvalidLength(6))
        );
    }

    #[test]
    fn parse_entry() {
        let feedback: Feedback = "crane:YGG-G".parse().unwrap();
        assert_eq!(feedback, score_words("crane", "trace").unwrap());
        assert_eq!(feedback.to_string(), "crane:YGG-G");
        assert_eq!(" crane :YGG-G".parse::<Feedback>().unwrap(), feedback);
    }

    #[test]
    fn parse_entry_errors() {
        assert!(matches!(
            "crane".parse::<Feedback>(),
            Err(FeedbackError::MissingSeparator(_))
        ));
        assert!(matches!(
            "cran:GGGGG".parse::<Feedback>(),
            Err(FeedbackError::Word(WordError::InvalidLength(4)))
        ));
        assert!(matches!(
            "crane:GGXGG".parse::<Feedback>(),
            Err(FeedbackError::Pattern(PatternError::InvalidSymbol('X')))
        ));
    }

    #[test]
    fn canonical_key_is_injective_over_outcomes() {
        let a = Feedback::score(word("speed"), &word("abide"));
        let b = Feedback::score(word("speed"), &word("erase"));
        let c = Feedback::score(word("sleep"), &word("abide"));

        assert_ne!(canonical_key(&a), canonical_key(&b));
        assert_eq!(canonical_key(&a), "--Y-Y");
        // Same outcomes from a different guess share the key
        assert_eq!(
            canonical_key(&Feedback::new(word("crane"), a.pattern())),
            canonical_key(&a)
        );
        assert_eq!(canonical_key(&c).len(), WORD_LENGTH);
    }
}

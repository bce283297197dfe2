//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray)
//! - 1 = Present (yellow)
//! - 2 = Correct (green)
//!
//! Each position contributes digit × 3^position, so every outcome sequence
//! maps to exactly one value in `0..PATTERN_COUNT` and back.

use super::outcome::Outcome;
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Number of distinct patterns (3^`WORD_LENGTH`)
pub const PATTERN_COUNT: usize = 3usize.pow(WORD_LENGTH as u32);

const _: () = assert!(PATTERN_COUNT <= u16::MAX as usize + 1);

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single integer. The value is the
/// canonical numeric key used in partition maps; [`Pattern::key`] is the
/// equivalent textual key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u16);

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must have exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid pattern symbol '{ch}' (use G, Y or -)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self((PATTERN_COUNT - 1) as u16);

    /// All grays
    pub const ALL_ABSENT: Self = Self(0);

    /// Create a pattern from a raw value, `None` if it is `PATTERN_COUNT` or more
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if (value as usize) < PATTERN_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Correct pass: every position where the letters agree is green and its
    ///    answer position is consumed
    /// 2. Present pass: every remaining guess position, in order, takes the
    ///    leftmost unconsumed answer position holding the same letter (yellow)
    ///    and consumes it; positions with no such letter left are gray
    ///
    /// # Examples
    /// ```
    /// use wordlex::core::{Outcome, Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // Only one of the two E's is yellow: ABIDE has a single E
    /// assert_eq!(pattern.count(Outcome::Present), 2);
    /// assert_eq!(pattern.key(), "--Y-Y");
    /// ```
    #[must_use]
    // Allow: index pairs guess[i]/answer[j] with the parallel result/consumed arrays
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut result = [Outcome::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = Outcome::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] == Outcome::Correct {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                result[i] = Outcome::Present;
                consumed[j] = true;
            }
        }

        Self::from_outcomes(&result)
    }

    /// Encode an outcome sequence
    #[must_use]
    pub fn from_outcomes(outcomes: &[Outcome; WORD_LENGTH]) -> Self {
        let mut pattern = 0u16;
        let mut multiplier = 1u16;
        for outcome in outcomes {
            pattern += u16::from(outcome.digit()) * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode into one outcome per position
    #[must_use]
    pub fn outcomes(self) -> [Outcome; WORD_LENGTH] {
        let mut result = [Outcome::Absent; WORD_LENGTH];
        let mut val = self.0;

        for slot in &mut result {
            *slot = Outcome::from_digit((val % 3) as u8).unwrap_or(Outcome::Absent);
            val /= 3;
        }

        result
    }

    /// Count positions with the given outcome
    #[must_use]
    pub fn count(self, outcome: Outcome) -> usize {
        self.outcomes().iter().filter(|&&o| o == outcome).count()
    }

    /// Canonical textual key, one symbol per position ('G', 'Y', '-')
    ///
    /// Distinct outcome sequences always produce distinct keys.
    #[must_use]
    pub fn key(self) -> String {
        self.outcomes().iter().map(|o| o.symbol()).collect()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `PatternError` if the string does not hold exactly
    /// `WORD_LENGTH` recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use wordlex::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut outcomes = [Outcome::Absent; WORD_LENGTH];
        for (slot, ch) in outcomes.iter_mut().zip(chars) {
            *slot = Outcome::from_symbol(ch).ok_or(PatternError::InvalidSymbol(ch))?;
        }

        Ok(Self::from_outcomes(&outcomes))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.outcomes().iter().map(|o| o.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Outcome::{Absent, Correct, Present};

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count(Correct), 5);
        assert_eq!(Pattern::PERFECT.key(), "GGGGG");
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = calc("abcde", "fghij");
        assert_eq!(pattern, Pattern::ALL_ABSENT);
        assert_eq!(pattern.key(), "-----");
    }

    #[test]
    fn pattern_all_green() {
        assert_eq!(calc("crane", "crane"), Pattern::PERFECT);
    }

    #[test]
    fn pattern_duplicate_guess_letter_single_in_answer() {
        // SPEED vs ABIDE: ABIDE has one E, so only the first E is yellow
        let pattern = calc("speed", "abide");
        assert_eq!(pattern.outcomes(), [Absent, Absent, Present, Absent, Present]);
        assert_eq!(pattern.key(), "--Y-Y");
    }

    #[test]
    fn pattern_duplicate_letters_both_present() {
        // SPEED vs ERASE: S yellow, both E's yellow
        let pattern = calc("speed", "erase");
        assert_eq!(pattern.outcomes(), [Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn pattern_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: second O is green, first O takes the other O
        let pattern = calc("robot", "floor");
        assert_eq!(pattern.outcomes(), [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn pattern_green_later_blocks_earlier_yellow() {
        // EERIE vs THEME: E(4) is green, E(0) takes the E at 2, E(1) gets nothing
        let pattern = calc("eerie", "theme");
        assert_eq!(pattern.outcomes(), [Present, Absent, Absent, Absent, Correct]);
    }

    #[test]
    fn pattern_crane_vs_trace() {
        // R sits at index 1 in both words, so it is green
        let pattern = calc("crane", "trace");
        assert_eq!(pattern.outcomes(), [Present, Correct, Correct, Absent, Correct]);
    }

    #[test]
    fn pattern_outcomes_round_trip() {
        let outcomes = [Correct, Absent, Present, Present, Correct];
        assert_eq!(Pattern::from_outcomes(&outcomes).outcomes(), outcomes);
    }

    #[test]
    fn pattern_keys_are_unique() {
        let keys: std::collections::HashSet<String> =
            (0..PATTERN_COUNT as u16).map(|v| Pattern::new(v).unwrap().key()).collect();
        assert_eq!(keys.len(), PATTERN_COUNT);
    }

    #[test]
    fn pattern_new_rejects_out_of_range() {
        assert_eq!(Pattern::new(0), Some(Pattern::ALL_ABSENT));
        assert_eq!(Pattern::new(PATTERN_COUNT as u16 - 1), Some(Pattern::PERFECT));
        assert_eq!(Pattern::new(PATTERN_COUNT as u16), None);
        assert_eq!(Pattern::new(u16::MAX), None);
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(Pattern::parse("GYGGYX"), Err(PatternError::InvalidLength(6)));
        assert_eq!(Pattern::parse("GYG"), Err(PatternError::InvalidLength(3)));
        assert_eq!(Pattern::parse("GXGGY"), Err(PatternError::InvalidSymbol('X')));
        assert_eq!(Pattern::parse(""), Err(PatternError::InvalidLength(0)));
    }

    #[test]
    fn pattern_to_emoji() {
        assert_eq!(Pattern::parse("GY-GY").unwrap().to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(calc(word, word), Pattern::PERFECT);
        }
    }

    #[test]
    fn correct_count_matches_positional_equality() {
        let words = ["crane", "slate", "speed", "abide", "eerie", "theme", "geese"];
        for guess in words {
            for answer in words {
                let expected = guess
                    .bytes()
                    .zip(answer.bytes())
                    .filter(|(g, a)| g == a)
                    .count();
                assert_eq!(calc(guess, answer).count(Correct), expected, "{guess} vs {answer}");
            }
        }
    }
}

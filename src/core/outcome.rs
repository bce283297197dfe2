//! Per-letter feedback outcome

use std::fmt;

/// Feedback for a single letter of a guess
///
/// The derived ordering `Absent < Present < Correct` is display precedence:
/// a keyboard key shows the highest outcome its letter has ever received.
/// Scoring and filtering never rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Letter does not contribute further (gray)
    Absent,
    /// Letter exists at an unconsumed position elsewhere (yellow)
    Present,
    /// Letter matches the position (green)
    Correct,
}

impl Outcome {
    /// All outcomes in base-3 digit order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Base-3 digit used by [`Pattern`](super::Pattern) encoding
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`Outcome::digit`], `None` for digits >= 3
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Single-character token used in canonical pattern keys
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    /// Parse a feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

//! Formatting utilities for terminal output

use crate::core::{LetterStates, Outcome, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows for the letter-state display
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled against the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

fn paint(text: &str, state: Option<Outcome>) -> ColoredString {
    match state {
        Some(Outcome::Correct) => text.black().on_green().bold(),
        Some(Outcome::Present) => text.black().on_yellow().bold(),
        Some(Outcome::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess drawn as colored tiles, one per letter
#[must_use]
pub fn colored_tiles(word: &Word, pattern: Pattern) -> String {
    word.letters()
        .iter()
        .zip(pattern.outcomes())
        .map(|(&letter, outcome)| {
            let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            paint(&tile, Some(outcome)).to_string()
        })
        .collect()
}

/// Letters of one keyboard row with their known state
#[must_use]
pub fn keyboard_row(row: &str, letters: &LetterStates) -> Vec<(char, Option<Outcome>)> {
    row.bytes()
        .map(|b| (char::from(b), letters.get(b)))
        .collect()
}

/// Keyboard rows as colored lines, indented like a real keyboard
#[must_use]
pub fn keyboard_lines(letters: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = keyboard_row(row, letters)
                .into_iter()
                .map(|(ch, state)| {
                    let key = format!(" {} ", ch.to_ascii_uppercase());
                    paint(&key, state).to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

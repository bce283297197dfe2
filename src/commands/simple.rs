//! Simple interactive CLI mode
//!
//! Text-based assistant for a game played elsewhere: enter each guess with
//! the colors it received and get the remaining words and the next
//! suggestions.

use crate::core::{Feedback, Pattern, Word};
use crate::output::display::{print_candidates, print_keyboard, print_suggestions};
use crate::session::{MAX_GUESSES, Session};
use crate::solver::{Ranker, Solver};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player typed at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Undo,
    /// Feedback for the suggested guess, or for an explicit one
    Feedback(Option<Word>, Pattern),
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Input::Quit,
        "new" | "n" => return Input::New,
        "undo" | "u" => return Input::Undo,
        "win" | "correct" | "solved" => return Input::Feedback(None, Pattern::PERFECT),
        _ => {}
    }

    let mut parts = line.split(|c: char| c.is_whitespace() || c == ':');
    let first = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.filter(|p| !p.is_empty()).collect();

    match rest.as_slice() {
        [] => match Pattern::parse(first) {
            Ok(pattern) => Input::Feedback(None, pattern),
            Err(e) => Input::Invalid(e.to_string()),
        },
        [pattern] => match (Word::new(first), Pattern::parse(pattern)) {
            (Ok(word), Ok(pattern)) => Input::Feedback(Some(word), pattern),
            (Err(e), _) => Input::Invalid(e.to_string()),
            (_, Err(e)) => Input::Invalid(e.to_string()),
        },
        _ => Input::Invalid("Expected 'GUESS PATTERN' or 'PATTERN'".to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(solver: &Solver<'_>, top_n: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 WordleX Solver - Interactive                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the guess and its colors, e.g. 'crane -YG-G'.");
    println!("Enter just the colors to accept the suggested guess.\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Earlier sessions, for undo
    let mut previous: Vec<Session> = Vec::new();
    let mut session = Session::new(solver.answer_words());
    // Undo and bad input redraw the same candidates; keep their partitions
    let mut ranker = Ranker::new();

    loop {
        let ranked = solver.suggestions_cached(&mut ranker, session.candidates(), usize::MAX);
        let suggested = Solver::pick(session.candidates(), &ranked);

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining",
            session.turn() + 1,
            session.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");

        if session.is_stuck() {
            println!(
                "\n{}",
                "❌ No candidates remain! Your feedback may be incorrect.".red()
            );
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        } else {
            print_suggestions(&ranked[..top_n.min(ranked.len())]);
            if session.candidates().len() <= 10 {
                print_candidates(session.candidates().as_slice(), 10);
            }
            if let Some(word) = suggested {
                println!("\n📊 Suggested guess: {}", word.as_str().to_uppercase().bold());
            }
        }
        print_keyboard(session.letters());

        print!("\nGuess and feedback: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("Failed to read input")?;

        match parse_input(&line) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::New => {
                previous.clear();
                session = Session::new(solver.answer_words());
                println!("\n🔄 New game started!\n");
            }
            Input::Undo => {
                if let Some(earlier) = previous.pop() {
                    session = earlier;
                    println!("✓ Undone! Back to turn {}\n", session.turn() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Input::Invalid(message) => println!("❌ {message}\n"),
            Input::Feedback(word, pattern) => {
                let Some(guess) = word.or(suggested) else {
                    println!("❌ No suggestion to apply; enter the guess too\n");
                    continue;
                };

                let next = session.apply(Feedback::new(guess, pattern));
                previous.push(std::mem::replace(&mut session, next));

                if session.is_solved() {
                    print_solved(&session);
                    previous.clear();
                    session = Session::new(solver.answer_words());
                    println!("🔄 New game started!\n");
                } else if session.is_out_of_guesses() {
                    println!(
                        "\n{}",
                        format!("Board full after {MAX_GUESSES} guesses; keep going or 'new'.")
                            .yellow()
                    );
                }
            }
        }
    }
}

fn print_solved(session: &Session) {
    let turn = session.turn();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, feedback) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            feedback.guess().as_str().to_uppercase().bright_white().bold(),
            feedback.pattern().to_emoji()
        );
    }
    println!("\n{}\n", "═".repeat(70).bright_cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(" NEW "), Input::New);
        assert_eq!(parse_input("u"), Input::Undo);
        assert_eq!(parse_input("win"), Input::Feedback(None, Pattern::PERFECT));
    }

    #[test]
    fn parses_pattern_only() {
        assert_eq!(
            parse_input("-yg-g"),
            Input::Feedback(None, Pattern::parse("-YG-G").unwrap())
        );
    }

    #[test]
    fn parses_guess_and_pattern() {
        let expected = Input::Feedback(
            Some(Word::new("crane").unwrap()),
            Pattern::parse("YGG-G").unwrap(),
        );
        assert_eq!(parse_input("crane YGG-G"), expected);
        assert_eq!(parse_input("crane:YGG-G"), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_input("hello"), Input::Invalid(_)));
        assert!(matches!(parse_input("crane GGG"), Input::Invalid(_)));
        assert!(matches!(parse_input("a b c"), Input::Invalid(_)));
    }
}

//! WordleX
//!
//! Wordle decision support: exact feedback scoring, candidate filtering and
//! guesses ranked by Shannon entropy over the remaining answers.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlex::core::{Pattern, Word};
//! use wordlex::solver::{GuessPool, Solver};
//! use wordlex::session::Session;
//!
//! let answers: Vec<Word> = ["crane", "slate", "trace", "react"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! // Score a guess
//! let guess = Word::new("crane").unwrap();
//! let pattern = Pattern::calculate(&guess, &answers[2]);
//! assert_eq!(pattern.key(), "YGG-G");
//!
//! // Narrow the answers and ask for the next guess
//! let solver = Solver::new(GuessPool::Candidates, &answers, &answers);
//! let session = Session::new(&answers).apply(wordlex::core::Feedback::new(guess, pattern));
//! assert_eq!(session.candidates().len(), 1);
//! assert_eq!(solver.best_guess(session.candidates()), Some(answers[2]));
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Game state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

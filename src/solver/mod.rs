//! Candidate filtering and guess ranking
//!
//! The filter narrows the possible answers with a feedback history; the
//! entropy ranker scores guesses by how well they split what is left.

mod candidates;
mod engine;
pub mod entropy;
mod filter;
mod pool;

pub use candidates::CandidateSet;
pub use engine::Solver;
pub use entropy::{PartitionMap, Ranker, Suggestion, rank};
pub use filter::{filter, is_consistent};
pub use pool::GuessPool;

//! Command implementations
//!
//! Each command turns plain input into a result struct; printing lives in
//! [`crate::output`].

pub mod analyze;
pub mod benchmark;
pub mod query;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use query::{QueryResult, parse_history, run_query};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};

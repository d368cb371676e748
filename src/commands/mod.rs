//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod best;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use best::{BestResult, best_guesses, parse_history_entry};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};

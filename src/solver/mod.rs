//! Pattern-matrix solving engine
//!
//! The matrix is built once per word-list pair; filtering and ranking are
//! lookups against it.

mod config;
mod engine;
pub mod entropy;
mod error;
mod filter;
mod matrix;
mod progress;
mod strategy;
mod worker;

pub use config::EngineConfig;
pub use engine::Engine;
pub use entropy::{RankedCandidate, Ranking};
pub use error::{EngineError, WordList};
pub use filter::filter_candidates;
pub use matrix::PatternMatrix;
pub use progress::{BarReporter, BuildProgress, FnReporter, ProgressEvent, ProgressReporter};
pub use strategy::{SearchMode, UnknownMode};
pub use worker::{Request, Response, Worker};

//! Entropy scoring and guess ranking
//!
//! Shannon entropy of the feedback distribution a guess induces over the
//! candidate set is the measure of how much that guess would tell us.

mod calculator;
mod ranker;

pub use calculator::{
    GuessMetrics, Histogram, calculate_entropy, calculate_metrics, fill_histogram, shannon_entropy,
};
pub use ranker::{RankContext, RankedCandidate, Ranking, rank, win_probability};

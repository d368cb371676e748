//! Benchmark command
//!
//! Self-plays a set of target words and summarizes how many guesses each
//! one took.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use super::solve::{SolveConfig, solve_word};
use crate::solver::{Engine, SearchMode};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failures: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
    pub opening: String,
    pub mode: SearchMode,
}

/// Pick which solution indices to play
///
/// Without `random` the first `count` solutions are used. With it, `count`
/// distinct indices are sampled, reproducibly when `seed` is given.
#[must_use]
pub fn select_targets(total: usize, count: usize, random: bool, seed: Option<u64>) -> Vec<usize> {
    let count = count.min(total);
    if !random && seed.is_none() {
        return (0..count).collect();
    }

    let sampled = match seed {
        Some(seed) => index::sample(&mut StdRng::seed_from_u64(seed), total, count),
        None => index::sample(&mut rand::rng(), total, count),
    };
    sampled.into_vec()
}

/// Run benchmark on a set of target solution indices
///
/// The opening is ranked once (or taken from `forced_first`) and reused for
/// every target.
///
/// # Errors
///
/// Returns an error if the opening cannot be determined or a target index
/// is not a solution.
pub fn run_benchmark(
    engine: &Engine,
    targets: &[usize],
    mode: SearchMode,
    forced_first: Option<&str>,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let opening = match forced_first {
        Some(word) => word.trim().to_lowercase(),
        None => engine
            .find_best(&engine.full_range(), mode, &mut ())?
            .best()
            .map(|c| c.word.clone())
            .context("empty solution list")?,
    };
    log::info!("benchmarking {} targets with opening {opening}", targets.len());

    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for &target in targets {
        let word = engine
            .solutions()
            .get(target)
            .with_context(|| format!("target index {target} out of range"))?
            .text()
            .to_string();

        let config = SolveConfig::new(word.clone())
            .with_mode(mode)
            .with_opening(Some(opening.clone()));
        let result = solve_word(engine, config, &mut ())?;
        let guesses = result.guesses.len();

        total_guesses += guesses;
        if result.success {
            solved += 1;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(word);
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        opening,
        mode,
    })
}

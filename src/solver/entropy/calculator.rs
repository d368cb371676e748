//! Shannon entropy of a guess's feedback distribution
//!
//! Works directly on pattern-matrix rows: a guess row plus the current
//! candidate indices give a 243-bucket histogram of feedback codes.

use crate::core::PATTERN_COUNT;

/// Per-code tally for one guess
pub type Histogram = [u32; PATTERN_COUNT];

/// Summary metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Tally `row[s]` for every candidate `s` into `counts`
///
/// `counts` is cleared first so one buffer can be reused across guesses.
///
/// # Panics
/// Panics if a candidate index is outside `row`
#[inline]
pub fn fill_histogram(row: &[u8], candidates: &[usize], counts: &mut Histogram) {
    counts.fill(0);
    for &solution in candidates {
        counts[usize::from(row[solution])] += 1;
    }
}

/// Calculate Shannon entropy from a feedback histogram
///
/// H = -Σ p * log₂(p) over the nonzero buckets
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket holds everything)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n observations
///
/// # Examples
/// ```
/// use wordle_matrix::solver::entropy::shannon_entropy;
///
/// let uniform = [25, 25, 25, 25];
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-9); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of one guess row against the candidate set
#[must_use]
pub fn calculate_entropy(row: &[u8], candidates: &[usize]) -> f64 {
    let mut counts = [0u32; PATTERN_COUNT];
    fill_histogram(row, candidates, &mut counts);
    shannon_entropy(&counts)
}

/// Calculate entropy, expected remaining candidates and worst-case partition
#[must_use]
pub fn calculate_metrics(row: &[u8], candidates: &[usize]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let mut counts = [0u32; PATTERN_COUNT];
    fill_histogram(row, candidates, &mut counts);

    let total = candidates.len() as f64;

    // Σ p(k) × |bucket k|
    let expected_remaining = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| f64::from(c) * f64::from(c) / total)
        .sum();

    let max_partition = counts.iter().copied().max().unwrap_or(0) as usize;

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    }
}

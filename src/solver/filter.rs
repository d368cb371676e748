//! Candidate filtering against the pattern matrix
//!
//! Observed feedback is compared with the precomputed row for the guess, so
//! no feedback is re-encoded here.

use super::matrix::PatternMatrix;
use crate::core::Pattern;

/// Keep the candidates whose stored feedback for `guess_row` equals `observed`
///
/// Order of `current` is preserved and `current` itself is never modified.
/// The result is always a subset of `current`, and filtering an already
/// filtered set with the same feedback returns it unchanged.
///
/// # Panics
/// Panics if `guess_row` is not a row of `matrix`
#[must_use]
pub fn filter_candidates(
    matrix: &PatternMatrix,
    guess_row: usize,
    observed: Pattern,
    current: &[usize],
) -> Vec<usize> {
    let row = matrix.row(guess_row);
    let code = observed.value();

    current
        .iter()
        .copied()
        .filter(|&solution| row.get(solution) == Some(&code))
        .collect()
}

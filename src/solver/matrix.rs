//! Precomputed feedback table
//!
//! One row per dictionary word, one column per solution. Each cell is the
//! feedback code `Pattern::calculate(dictionary[row], solutions[col])`.
//! Built once, read-only afterwards, so it can be shared across threads
//! without locking.

use super::progress::{BuildProgress, ProgressReporter};
use crate::core::{Pattern, Word};
use rayon::prelude::*;

/// Dense `|dictionary| × |solutions|` table of feedback codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatrix {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl PatternMatrix {
    /// Build the table for every (guess, solution) pair
    ///
    /// Rows are computed in blocks of `block_rows` (in parallel within a
    /// block). Progress is reported after each block, so the final row is
    /// always reported.
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::core::{Pattern, Word};
    /// use wordle_matrix::solver::PatternMatrix;
    ///
    /// let dictionary = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let solutions = vec![Word::new("slate").unwrap()];
    ///
    /// let matrix = PatternMatrix::build(&dictionary, &solutions, 100, &mut ());
    /// assert_eq!(matrix.get(1, 0), Pattern::PERFECT);
    /// ```
    pub fn build(
        dictionary: &[Word],
        solutions: &[Word],
        block_rows: usize,
        reporter: &mut dyn ProgressReporter,
    ) -> Self {
        let rows = dictionary.len();
        let cols = solutions.len();
        let block_rows = block_rows.max(1);
        let mut cells = vec![0u8; rows * cols];

        for start in (0..rows).step_by(block_rows) {
            let end = (start + block_rows).min(rows);

            cells[start * cols..end * cols]
                .par_chunks_mut(cols.max(1))
                .zip(dictionary[start..end].par_iter())
                .for_each(|(row, guess)| {
                    for (cell, solution) in row.iter_mut().zip(solutions) {
                        *cell = Pattern::calculate(guess, solution).value();
                    }
                });

            reporter.matrix_progress(BuildProgress {
                current: end,
                total: rows,
            });
        }

        Self { cells, rows, cols }
    }

    /// Number of guess rows (dictionary size)
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of solution columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Feedback code for guess row `row` against solution `col`
    ///
    /// # Panics
    /// Panics if either index is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Pattern {
        assert!(col < self.cols, "solution index {col} out of range");
        Pattern::new(self.cells[row * self.cols + col])
    }

    /// Raw feedback codes for one guess row, indexed by solution
    ///
    /// # Panics
    /// Panics if `row` is out of range
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::progress::{FnReporter, ProgressEvent};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn cells_match_encoder() {
        let dictionary = words(&["speed", "erase", "crane", "robot"]);
        let solutions = words(&["erase", "floor", "slate"]);

        let matrix = PatternMatrix::build(&dictionary, &solutions, 100, &mut ());

        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 3);
        for (g, guess) in dictionary.iter().enumerate() {
            for (s, solution) in solutions.iter().enumerate() {
                assert_eq!(matrix.get(g, s), Pattern::calculate(guess, solution));
            }
        }
        assert_eq!(matrix.get(0, 0).value(), 37);
        assert_eq!(matrix.get(1, 0), Pattern::PERFECT);
        // ROBOT: R yellow vs ERASE, see encoder tests for FLOOR, T yellow vs SLATE
        assert_eq!(matrix.row(3), &[1, 58, 81][..]);
    }

    #[test]
    fn progress_reported_per_block_and_on_last_row() {
        let dictionary = words(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"]);
        let solutions = words(&["abcde"]);

        let mut seen = Vec::new();
        let mut reporter = FnReporter(|e: ProgressEvent| {
            if let ProgressEvent::Matrix(p) = e {
                seen.push(p.current);
            }
        });
        let _ = PatternMatrix::build(&dictionary, &solutions, 2, &mut reporter);

        assert_eq!(seen, vec![2, 4, 5]);
    }

    #[test]
    fn empty_lists_build_empty_matrix() {
        let dictionary = words(&["crane"]);
        let matrix = PatternMatrix::build(&dictionary, &[], 100, &mut ());
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 0);
        assert!(matrix.row(0).is_empty());

        let matrix = PatternMatrix::build(&[], &dictionary, 100, &mut ());
        assert_eq!(matrix.rows(), 0);
    }
}

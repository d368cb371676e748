//! Guess ranking by Shannon entropy
//!
//! Every row of the search space is scored against the current candidate
//! set, adjusted by the mode's win bonus, and the best `top_n` are kept.

use super::calculator::{Histogram, fill_histogram, shannon_entropy};
use crate::core::{PATTERN_COUNT, Word};
use crate::solver::config::EngineConfig;
use crate::solver::matrix::PatternMatrix;
use crate::solver::progress::ProgressReporter;
use crate::solver::strategy::SearchMode;
use rayon::prelude::*;

/// One scored guess
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub word: String,
    /// Raw entropy plus the mode's win bonus; used for ordering
    pub entropy: f64,
    /// Information value of the guess alone, in bits
    pub raw_entropy: f64,
    /// Chance (percent, one decimal) that this guess is the answer
    pub win_probability: f64,
    /// Whether the guess is still a possible answer
    pub is_solution: bool,
}

/// Result of one ranking pass
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Best guesses, highest adjusted entropy first
    pub candidates: Vec<RankedCandidate>,
    /// Number of dictionary rows scored
    pub searched_count: usize,
    pub mode: SearchMode,
}

impl Ranking {
    #[must_use]
    pub fn best(&self) -> Option<&RankedCandidate> {
        self.candidates.first()
    }

    /// No candidate survived the observed feedback
    #[must_use]
    pub fn is_dead_end(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Read-only inputs shared by every ranking pass
#[derive(Clone, Copy)]
pub struct RankContext<'a> {
    pub matrix: &'a PatternMatrix,
    pub dictionary: &'a [Word],
    pub solutions: &'a [Word],
    /// Dictionary row of each solution, if it is a legal guess
    pub solution_rows: &'a [Option<usize>],
    pub config: &'a EngineConfig,
}

/// `100 / remaining`, rounded to one decimal
#[inline]
#[must_use]
pub fn win_probability(remaining: usize) -> f64 {
    if remaining == 0 {
        return 0.0;
    }
    (1000.0 / remaining as f64).round() / 10.0
}

/// Rank guesses for the candidate set `possible`
///
/// An empty `possible` yields an empty ranking (dead end). A single
/// candidate yields exactly that word with zero entropy and a certain win.
///
/// Rows are scored in parallel, each thread owning its own histogram, and
/// concatenated in scan order before a stable sort. When the search space
/// exceeds `compute_progress_threshold`, progress is reported after every
/// `compute_progress_interval` rows.
///
/// # Panics
/// Panics if an index in `possible` does not address a solution
pub fn rank(
    ctx: RankContext<'_>,
    possible: &[usize],
    mode: SearchMode,
    reporter: &mut dyn ProgressReporter,
) -> Ranking {
    let remaining = possible.len();

    if remaining == 0 {
        return Ranking {
            candidates: Vec::new(),
            searched_count: 0,
            mode,
        };
    }

    if remaining == 1 {
        return Ranking {
            candidates: vec![RankedCandidate {
                word: ctx.solutions[possible[0]].text().to_string(),
                entropy: 0.0,
                raw_entropy: 0.0,
                win_probability: 100.0,
                is_solution: true,
            }],
            searched_count: 0,
            mode,
        };
    }

    // Membership is rebuilt per call from the current candidate set
    let mut is_candidate = vec![false; ctx.dictionary.len()];
    let remaining_rows: Vec<usize> = possible
        .iter()
        .filter_map(|&s| ctx.solution_rows[s])
        .collect();
    for &row in &remaining_rows {
        is_candidate[row] = true;
    }

    let space = mode.search_space(ctx.dictionary.len(), remaining, &remaining_rows, ctx.config);
    let bonus = mode.win_bonus(remaining);
    let win_chance = win_probability(remaining);

    let score = |counts: &mut Histogram, row: usize| {
        fill_histogram(ctx.matrix.row(row), possible, counts);
        let raw_entropy = shannon_entropy(counts);
        let is_solution = is_candidate[row];

        RankedCandidate {
            word: ctx.dictionary[row].text().to_string(),
            entropy: raw_entropy + if is_solution { bonus } else { 0.0 },
            raw_entropy,
            win_probability: if is_solution { win_chance } else { 0.0 },
            is_solution,
        }
    };

    let report = space.len() > ctx.config.compute_progress_threshold;
    let chunk_len = if report {
        ctx.config.compute_progress_interval.max(1)
    } else {
        space.len().max(1)
    };

    let mut scored = Vec::with_capacity(space.len());
    for chunk in space.chunks(chunk_len) {
        let part: Vec<RankedCandidate> = chunk
            .par_iter()
            .map_init(|| [0u32; PATTERN_COUNT], |counts, &row| score(counts, row))
            .collect();
        scored.extend(part);

        if report {
            reporter.compute_progress(scored.len() as f64 / space.len() as f64 * 100.0);
        }
    }

    // Stable: ties keep scan order
    scored.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    scored.truncate(ctx.config.top_n);

    log::debug!(
        "ranked {} rows ({mode}) for {remaining} candidates, best {:?}",
        space.len(),
        scored.first().map(|c| c.word.as_str())
    );

    Ranking {
        candidates: scored,
        searched_count: space.len(),
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::progress::{FnReporter, ProgressEvent};

    struct Fixture {
        dictionary: Vec<Word>,
        solutions: Vec<Word>,
        solution_rows: Vec<Option<usize>>,
        matrix: PatternMatrix,
        config: EngineConfig,
    }

    impl Fixture {
        fn new(dictionary: &[&str], solutions: &[&str]) -> Self {
            let dictionary: Vec<Word> = dictionary.iter().map(|w| Word::new(w).unwrap()).collect();
            let solutions: Vec<Word> = solutions.iter().map(|w| Word::new(w).unwrap()).collect();
            let solution_rows = solutions
                .iter()
                .map(|s| dictionary.iter().position(|d| d == s))
                .collect();
            let matrix = PatternMatrix::build(&dictionary, &solutions, 100, &mut ());
            Self {
                dictionary,
                solutions,
                solution_rows,
                matrix,
                config: EngineConfig::default(),
            }
        }

        fn ctx(&self) -> RankContext<'_> {
            RankContext {
                matrix: &self.matrix,
                dictionary: &self.dictionary,
                solutions: &self.solutions,
                solution_rows: &self.solution_rows,
                config: &self.config,
            }
        }

        fn all(&self) -> Vec<usize> {
            (0..self.solutions.len()).collect()
        }
    }

    fn fixture() -> Fixture {
        Fixture::new(
            &["crane", "slate", "irate", "crate", "grate", "zzzzz", "cigar"],
            &["irate", "crate", "grate", "slate"],
        )
    }

    #[test]
    fn empty_candidates_rank_nothing() {
        let f = fixture();
        let ranking = rank(f.ctx(), &[], SearchMode::Strategic, &mut ());
        assert!(ranking.is_dead_end());
        assert_eq!(ranking.searched_count, 0);
    }

    #[test]
    fn single_candidate_is_certain() {
        let f = fixture();
        let ranking = rank(f.ctx(), &[2], SearchMode::Strategic, &mut ());

        assert_eq!(ranking.candidates.len(), 1);
        let only = &ranking.candidates[0];
        assert_eq!(only.word, "grate");
        assert!(only.raw_entropy.abs() < f64::EPSILON);
        assert!((only.win_probability - 100.0).abs() < f64::EPSILON);
        assert!(only.is_solution);
    }

    #[test]
    fn strategic_sorted_descending_and_bounded() {
        let f = fixture();
        let all = f.all();
        let ranking = rank(f.ctx(), &all, SearchMode::Strategic, &mut ());

        assert_eq!(ranking.searched_count, f.dictionary.len());
        assert!(ranking.candidates.len() <= f.dictionary.len().min(50));
        for pair in ranking.candidates.windows(2) {
            assert!(pair[0].entropy >= pair[1].entropy);
        }
        for c in &ranking.candidates {
            assert!(c.raw_entropy <= (all.len() as f64).log2() + 1e-9);
            assert!(c.raw_entropy <= (243f64).log2());
        }
    }

    #[test]
    fn strategic_keeps_top_raw_entropy_guess() {
        let f = fixture();
        let all = f.all();
        let ranking = rank(f.ctx(), &all, SearchMode::Strategic, &mut ());

        let best_raw = ranking
            .candidates
            .iter()
            .map(|c| c.raw_entropy)
            .fold(f64::MIN, f64::max);
        let full_best = (0..f.dictionary.len())
            .map(|row| super::super::calculate_entropy(f.matrix.row(row), &all))
            .fold(f64::MIN, f64::max);
        assert!((best_raw - full_best).abs() < 1e-12);
    }

    #[test]
    fn greedy_returns_only_solutions() {
        let f = fixture();
        let all = f.all();
        let ranking = rank(f.ctx(), &all, SearchMode::Greedy, &mut ());

        assert_eq!(ranking.searched_count, 4);
        assert_eq!(ranking.candidates.len(), 4);
        for c in &ranking.candidates {
            assert!(c.is_solution);
            assert!((c.win_probability - 25.0).abs() < f64::EPSILON);
            assert!((c.entropy - c.raw_entropy - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn strategic_burner_beats_weaker_solution() {
        // Every solution guess splits {irate, crate, grate, slate} worse than
        // a burner that tests c, g, s and i at once
        let f = Fixture::new(
            &["irate", "crate", "grate", "slate", "gisco"],
            &["irate", "crate", "grate", "slate"],
        );
        let all = f.all();
        let ranking = rank(f.ctx(), &all, SearchMode::Strategic, &mut ());

        let best = ranking.best().unwrap();
        assert_eq!(best.word, "gisco");
        assert!(!best.is_solution);
        assert!(best.win_probability.abs() < f64::EPSILON);
        assert!((best.raw_entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn top_n_truncates() {
        let mut f = fixture();
        f.config = EngineConfig::default().with_top_n(2);
        let all = f.all();
        let ranking = rank(f.ctx(), &all, SearchMode::Strategic, &mut ());
        assert_eq!(ranking.candidates.len(), 2);
        assert_eq!(ranking.searched_count, f.dictionary.len());
    }

    #[test]
    fn sampled_strategic_scores_prefix_only() {
        let mut f = fixture();
        f.config = EngineConfig::default().with_sampling(3, 2);
        let all = f.all();
        let ranking = rank(f.ctx(), &all, SearchMode::Strategic, &mut ());

        assert_eq!(ranking.searched_count, 2);
        let words: Vec<&str> = ranking.candidates.iter().map(|c| c.word.as_str()).collect();
        assert!(words.iter().all(|w| *w == "crane" || *w == "slate"));
    }

    #[test]
    fn progress_reported_for_large_search_space() {
        let mut f = fixture();
        f.config = EngineConfig {
            compute_progress_threshold: 3,
            compute_progress_interval: 3,
            ..EngineConfig::default()
        };
        let all = f.all();

        let mut seen = Vec::new();
        let mut reporter = FnReporter(|e: ProgressEvent| {
            if let ProgressEvent::Compute(p) = e {
                seen.push(p);
            }
        });
        let _ = rank(f.ctx(), &all, SearchMode::Strategic, &mut reporter);

        // 7 rows in chunks of 3: 3, 6, 7
        assert_eq!(seen.len(), 3);
        assert!((seen[2] - 100.0).abs() < 1e-9);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn win_probability_rounds_to_one_decimal() {
        assert!((win_probability(3) - 33.3).abs() < 1e-9);
        assert!((win_probability(6) - 16.7).abs() < 1e-9);
        assert!((win_probability(1) - 100.0).abs() < 1e-9);
        assert!(win_probability(0).abs() < f64::EPSILON);
    }
}

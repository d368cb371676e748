//! Owned solving engine
//!
//! Holds the word lists, their lookup maps and the pattern matrix. Built
//! once by [`Engine::init`]; every later call only reads it, so a shared
//! reference can serve any number of concurrent filter and rank calls.

use std::time::Instant;

use rustc_hash::FxHashMap;

use super::config::EngineConfig;
use super::entropy::{RankContext, Ranking, rank};
use super::error::{EngineError, WordList};
use super::filter::filter_candidates;
use super::matrix::PatternMatrix;
use super::progress::ProgressReporter;
use super::strategy::SearchMode;
use crate::core::{Mark, Pattern, WORD_LEN, Word};

/// Pattern-matrix solving engine
#[derive(Debug, Clone)]
pub struct Engine {
    solutions: Vec<Word>,
    dictionary: Vec<Word>,
    solution_index: FxHashMap<String, usize>,
    dictionary_index: FxHashMap<String, usize>,
    /// Dictionary row of each solution, `None` if it is not a legal guess
    solution_rows: Vec<Option<usize>>,
    matrix: PatternMatrix,
    config: EngineConfig,
}

impl Engine {
    /// Validate both lists and build the pattern matrix
    ///
    /// Words are kept exactly as given. Fails fast with
    /// [`EngineError::MalformedWord`] on the first word that is not five bytes
    /// long; nothing is truncated or padded.
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::solver::{Engine, EngineConfig, SearchMode};
    ///
    /// let engine = Engine::init(
    ///     &["irate", "crate", "grate"],
    ///     &["crane", "irate", "crate", "grate"],
    ///     EngineConfig::default(),
    ///     &mut (),
    /// )
    /// .unwrap();
    ///
    /// let ranking = engine
    ///     .find_best(&engine.full_range(), SearchMode::Strategic, &mut ())
    ///     .unwrap();
    /// assert!(!ranking.candidates.is_empty());
    /// ```
    pub fn init<S: AsRef<str>>(
        solutions: &[S],
        dictionary: &[S],
        config: EngineConfig,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<Self, EngineError> {
        let solutions = parse_list(solutions, WordList::Solutions)?;
        let dictionary = parse_list(dictionary, WordList::Dictionary)?;
        Ok(Self::from_words(solutions, dictionary, config, reporter))
    }

    /// Build from already validated words
    pub fn from_words(
        solutions: Vec<Word>,
        dictionary: Vec<Word>,
        config: EngineConfig,
        reporter: &mut dyn ProgressReporter,
    ) -> Self {
        let solution_index = index_map(&solutions);
        let dictionary_index = index_map(&dictionary);
        let solution_rows = solutions
            .iter()
            .map(|w| dictionary_index.get(w.text()).copied())
            .collect();

        log::info!(
            "building pattern matrix: {} guesses x {} solutions",
            dictionary.len(),
            solutions.len()
        );
        reporter.status("Building pattern matrix...");

        let start = Instant::now();
        let matrix = PatternMatrix::build(
            &dictionary,
            &solutions,
            config.build_progress_block,
            reporter,
        );

        log::info!(
            "pattern matrix ready ({} cells) in {:.2?}",
            matrix.rows() * matrix.cols(),
            start.elapsed()
        );
        reporter.status("Ready");

        Self {
            solutions,
            dictionary,
            solution_index,
            dictionary_index,
            solution_rows,
            matrix,
            config,
        }
    }

    /// Narrow `current` to the solutions consistent with `observed` for `guess`
    ///
    /// A guess missing from the dictionary leaves `current` unchanged and logs
    /// a warning, unless `strict_guesses` is set, in which case it is an
    /// [`EngineError::UnknownGuess`].
    pub fn filter(
        &self,
        guess: &str,
        observed: Pattern,
        current: &[usize],
    ) -> Result<Vec<usize>, EngineError> {
        self.check_indices(current)?;

        let Some(row) = self.dictionary_row(guess) else {
            if self.config.strict_guesses {
                return Err(EngineError::UnknownGuess(guess.to_string()));
            }
            log::warn!("filter: {guess:?} is not in the dictionary, candidates unchanged");
            return Ok(current.to_vec());
        };

        let filtered = filter_candidates(&self.matrix, row, observed, current);
        log::debug!(
            "filter {guess} {}: {} -> {} candidates",
            observed.to_letters(),
            current.len(),
            filtered.len()
        );
        Ok(filtered)
    }

    /// [`filter`](Self::filter) with tri-state markers instead of a code
    pub fn filter_marks(
        &self,
        guess: &str,
        marks: &[Mark; WORD_LEN],
        current: &[usize],
    ) -> Result<Vec<usize>, EngineError> {
        self.filter(guess, Pattern::from_marks(marks), current)
    }

    /// Rank guesses for the candidate set `possible`
    pub fn find_best(
        &self,
        possible: &[usize],
        mode: SearchMode,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<Ranking, EngineError> {
        self.check_indices(possible)?;
        Ok(rank(self.rank_context(), possible, mode, reporter))
    }

    fn rank_context(&self) -> RankContext<'_> {
        RankContext {
            matrix: &self.matrix,
            dictionary: &self.dictionary,
            solutions: &self.solutions,
            solution_rows: &self.solution_rows,
            config: &self.config,
        }
    }

    fn check_indices(&self, indices: &[usize]) -> Result<(), EngineError> {
        let len = self.solutions.len();
        match indices.iter().find(|&&index| index >= len) {
            Some(&index) => Err(EngineError::CandidateOutOfRange { index, len }),
            None => Ok(()),
        }
    }

    /// Every solution index, in list order
    #[must_use]
    pub fn full_range(&self) -> Vec<usize> {
        (0..self.solutions.len()).collect()
    }

    /// Dictionary row for `word`, matched exactly
    #[must_use]
    pub fn dictionary_row(&self, word: &str) -> Option<usize> {
        self.dictionary_index.get(word).copied()
    }

    /// Solution index for `word`, matched exactly
    #[must_use]
    pub fn solution_index(&self, word: &str) -> Option<usize> {
        self.solution_index.get(word).copied()
    }

    #[must_use]
    pub fn is_in_dictionary(&self, word: &str) -> bool {
        self.dictionary_row(word).is_some()
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// Solution words for a set of candidate indices
    ///
    /// Indices outside the solution list are skipped.
    #[must_use]
    pub fn words_for(&self, indices: &[usize]) -> Vec<&Word> {
        indices
            .iter()
            .filter_map(|&i| self.solutions.get(i))
            .collect()
    }

    #[must_use]
    pub const fn matrix(&self) -> &PatternMatrix {
        &self.matrix
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn parse_list<S: AsRef<str>>(words: &[S], list: WordList) -> Result<Vec<Word>, EngineError> {
    words
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            Word::exact(raw.as_ref()).map_err(|source| EngineError::MalformedWord {
                list,
                index,
                word: raw.as_ref().to_string(),
                source,
            })
        })
        .collect()
}

/// First occurrence wins for duplicated words
fn index_map(words: &[Word]) -> FxHashMap<String, usize> {
    let mut map = FxHashMap::default();
    map.reserve(words.len());
    for (i, word) in words.iter().enumerate() {
        map.entry(word.text().to_string()).or_insert(i);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use crate::solver::progress::{FnReporter, ProgressEvent};

    const SOLUTIONS: [&str; 4] = ["irate", "crate", "grate", "slate"];
    const DICTIONARY: [&str; 6] = ["crane", "slate", "irate", "crate", "grate", "zzzzz"];

    fn engine() -> Engine {
        Engine::init(&SOLUTIONS, &DICTIONARY, EngineConfig::default(), &mut ()).unwrap()
    }

    #[test]
    fn init_builds_lookup_tables() {
        let engine = engine();
        assert_eq!(engine.solutions().len(), 4);
        assert_eq!(engine.dictionary().len(), 6);
        assert_eq!(engine.dictionary_row("grate"), Some(4));
        assert_eq!(engine.dictionary_row("GRATE"), None);
        assert_eq!(engine.solution_index("slate"), Some(3));
        assert_eq!(engine.solution_index("crane"), None);
        assert!(engine.is_in_dictionary("zzzzz"));
        assert_eq!(engine.full_range(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn init_rejects_malformed_word() {
        let err = Engine::init(
            &["apple", "axle"],
            &["apple"],
            EngineConfig::default(),
            &mut (),
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::MalformedWord {
                list: WordList::Solutions,
                index: 1,
                word: "axle".to_string(),
                source: WordError::InvalidLength(4),
            }
        );
    }

    #[test]
    fn init_accepts_any_five_byte_word() {
        let engine = Engine::init(
            &["apple", "angle", "axle_"],
            &["apple", "angle", "axle_", "crane"],
            EngineConfig::default(),
            &mut (),
        )
        .unwrap();
        assert_eq!(engine.solution_index("axle_"), Some(2));
        assert_eq!(engine.dictionary_row("axle_"), Some(2));
    }

    #[test]
    fn init_reports_status_and_final_progress() {
        let mut events = Vec::new();
        let _ = Engine::init(
            &SOLUTIONS,
            &DICTIONARY,
            EngineConfig::default(),
            &mut FnReporter(|e: ProgressEvent| events.push(e)),
        )
        .unwrap();

        assert_eq!(
            events.first(),
            Some(&ProgressEvent::Status("Building pattern matrix...".to_string()))
        );
        assert!(events.iter().any(|e| matches!(
            e,
            ProgressEvent::Matrix(p) if p.current == 6 && p.total == 6
        )));
    }

    #[test]
    fn filter_uses_matrix_row() {
        let engine = engine();
        let observed = Pattern::calculate(
            &Word::new("crane").unwrap(),
            &Word::new("crate").unwrap(),
        );
        let filtered = engine
            .filter("crane", observed, &engine.full_range())
            .unwrap();
        assert_eq!(filtered, vec![1]);
    }

    #[test]
    fn filter_marks_matches_code() {
        let engine = engine();
        let marks = [Mark::Absent, Mark::Absent, Mark::Exact, Mark::Exact, Mark::Exact];
        let filtered = engine
            .filter_marks("slate", &marks, &engine.full_range())
            .unwrap();
        // irate, crate, grate: s and l absent, ate exact
        assert_eq!(filtered, vec![0, 1, 2]);
    }

    #[test]
    fn unknown_guess_passes_through() {
        let engine = engine();
        let current = vec![2, 0];
        let filtered = engine.filter("qwert", Pattern::NONE, &current).unwrap();
        assert_eq!(filtered, current);
    }

    #[test]
    fn guess_lookup_is_case_sensitive() {
        let engine = engine();
        let filtered = engine
            .filter("CRANE", Pattern::NONE, &[0, 1, 2, 3])
            .unwrap();
        assert_eq!(filtered, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_guess_rejected_in_strict_mode() {
        let engine = Engine::init(
            &SOLUTIONS,
            &DICTIONARY,
            EngineConfig::default().with_strict_guesses(true),
            &mut (),
        )
        .unwrap();
        assert_eq!(
            engine.filter("qwert", Pattern::NONE, &[0]),
            Err(EngineError::UnknownGuess("qwert".to_string()))
        );
    }

    #[test]
    fn out_of_range_indices_rejected() {
        let engine = engine();
        assert_eq!(
            engine.find_best(&[0, 9], SearchMode::Greedy, &mut ()),
            Err(EngineError::CandidateOutOfRange { index: 9, len: 4 })
        );
        assert!(engine.filter("crane", Pattern::NONE, &[4]).is_err());
    }

    #[test]
    fn solution_missing_from_dictionary_is_never_a_greedy_guess() {
        let engine = Engine::init(
            &["irate", "crate"],
            &["irate", "slate"],
            EngineConfig::default(),
            &mut (),
        )
        .unwrap();
        let ranking = engine
            .find_best(&engine.full_range(), SearchMode::Greedy, &mut ())
            .unwrap();
        assert_eq!(ranking.searched_count, 1);
        assert_eq!(ranking.candidates[0].word, "irate");
    }

    #[test]
    fn words_for_skips_bad_indices() {
        let engine = engine();
        let words: Vec<&str> = engine
            .words_for(&[3, 7, 0])
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(words, vec!["slate", "irate"]);
    }
}

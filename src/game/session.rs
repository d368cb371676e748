//! Caller-side game state
//!
//! The session owns the candidate set and guess history. It never computes
//! feedback itself: filtered indices and rankings come from an [`Engine`]
//! directly or from a [`Worker`](crate::solver::Worker) response, and are
//! applied with [`GameSession::apply_filtered`] and
//! [`GameSession::apply_ranking`].

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{Pattern, Word, WordError};
use crate::solver::entropy::win_probability;
use crate::solver::{Engine, EngineError, ProgressReporter, RankedCandidate, Ranking, SearchMode};

/// Candidates shown in the sidebar list
pub const VISIBLE_CANDIDATES: usize = 20;

/// Endgame list is shown when at most this many solutions remain
pub const ENDGAME_MAX: usize = 5;

/// Remaining-count label switches to "Narrowing down" at or below this
const NARROWING_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("{0:?} is not in the dictionary")]
    NotInDictionary(String),

    #[error("enter feedback for {0:?} first")]
    FeedbackPending(String),

    #[error("no guess is waiting for feedback")]
    NoPendingGuess,

    #[error("the game is over; start a new one")]
    GameOver,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// One submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEntry {
    pub word: String,
    /// `None` until feedback is entered
    pub feedback: Option<Pattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Exactly one candidate is left
    Solved(String),
    /// Feedback contradicts every solution
    DeadEnd,
}

/// A remaining solution and its chance of being the answer
#[derive(Debug, Clone, PartialEq)]
pub struct EndgameEntry {
    pub word: String,
    pub win_probability: f64,
}

/// Game in progress against one solution list and dictionary
#[derive(Debug, Clone)]
pub struct GameSession {
    solutions: Vec<String>,
    dictionary: FxHashSet<String>,
    candidates: Vec<usize>,
    guesses: Vec<GuessEntry>,
    mode: SearchMode,
    hide_solutions: bool,
    ranking: Option<Ranking>,
}

impl GameSession {
    /// New game over the given lists, all solutions possible
    #[must_use]
    pub fn new(solutions: Vec<String>, dictionary: &[String]) -> Self {
        let candidates = (0..solutions.len()).collect();
        Self {
            solutions,
            dictionary: dictionary.iter().cloned().collect(),
            candidates,
            guesses: Vec::new(),
            mode: SearchMode::default(),
            hide_solutions: false,
            ranking: None,
        }
    }

    /// New game over an engine's word lists
    #[must_use]
    pub fn for_engine(engine: &Engine) -> Self {
        let solutions = engine.solutions().iter().map(|w| w.text().to_string()).collect();
        let dictionary: Vec<String> = engine
            .dictionary()
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        Self::new(solutions, &dictionary)
    }

    /// Back to the full candidate range in strategic mode
    pub fn reset(&mut self) {
        self.candidates = (0..self.solutions.len()).collect();
        self.guesses.clear();
        self.mode = SearchMode::Strategic;
        self.hide_solutions = false;
        self.ranking = None;
    }

    /// Add a guess awaiting feedback
    ///
    /// # Errors
    /// Invalid or unknown words, a guess still waiting for feedback, or a
    /// finished game
    pub fn submit_guess(&mut self, word: &str) -> Result<(), SessionError> {
        if self.status() != GameStatus::InProgress {
            return Err(SessionError::GameOver);
        }
        if let Some(pending) = self.pending_guess() {
            return Err(SessionError::FeedbackPending(pending.to_string()));
        }

        let word = Word::new(word)?;
        if !self.dictionary.contains(word.text()) {
            return Err(SessionError::NotInDictionary(word.text().to_string()));
        }

        self.guesses.push(GuessEntry {
            word: word.text().to_string(),
            feedback: None,
        });
        Ok(())
    }

    /// Guess still waiting for feedback
    #[must_use]
    pub fn pending_guess(&self) -> Option<&str> {
        self.guesses
            .last()
            .filter(|g| g.feedback.is_none())
            .map(|g| g.word.as_str())
    }

    /// Drop the guess waiting for feedback, if any
    pub fn cancel_pending(&mut self) -> Option<String> {
        if self.pending_guess().is_some() {
            self.guesses.pop().map(|g| g.word)
        } else {
            None
        }
    }

    /// Attach feedback to the pending guess
    ///
    /// Returns the guess to pass to the engine's filter together with
    /// `pattern` and [`candidates`](Self::candidates).
    ///
    /// # Errors
    /// [`SessionError::NoPendingGuess`] if every guess already has feedback
    pub fn record_feedback(&mut self, pattern: Pattern) -> Result<String, SessionError> {
        let entry = self
            .guesses
            .last_mut()
            .filter(|g| g.feedback.is_none())
            .ok_or(SessionError::NoPendingGuess)?;
        entry.feedback = Some(pattern);
        Ok(entry.word.clone())
    }

    /// Replace the candidate set with a filter result
    pub fn apply_filtered(&mut self, candidates: Vec<usize>) {
        self.candidates = candidates;
        self.ranking = None;
    }

    /// Store a ranking for the current candidate set
    pub fn apply_ranking(&mut self, ranking: Ranking) {
        self.ranking = Some(ranking);
    }

    /// Record feedback and filter synchronously; returns the new count
    ///
    /// # Errors
    /// No pending guess, or an engine error from the filter
    pub fn enter_feedback(&mut self, engine: &Engine, pattern: Pattern) -> Result<usize, SessionError> {
        let guess = self.record_feedback(pattern)?;
        let filtered = engine.filter(&guess, pattern, &self.candidates)?;
        self.apply_filtered(filtered);
        Ok(self.candidates.len())
    }

    /// Submit `word` and its feedback in one step
    ///
    /// # Errors
    /// Anything [`submit_guess`](Self::submit_guess) or
    /// [`enter_feedback`](Self::enter_feedback) rejects
    pub fn play(&mut self, engine: &Engine, word: &str, pattern: Pattern) -> Result<usize, SessionError> {
        self.submit_guess(word)?;
        self.enter_feedback(engine, pattern)
    }

    /// Rank synchronously and store the result
    ///
    /// # Errors
    /// An engine error from ranking
    pub fn refresh_ranking(
        &mut self,
        engine: &Engine,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<&Ranking, SessionError> {
        let ranking = engine.find_best(&self.candidates, self.mode, reporter)?;
        Ok(&*self.ranking.insert(ranking))
    }

    /// A fresh ranking is due: candidates left, not solved, none stored
    #[must_use]
    pub fn needs_ranking(&self) -> bool {
        self.ranking.is_none() && self.candidates.len() > 1
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.candidates.as_slice() {
            [] => GameStatus::DeadEnd,
            [only] => GameStatus::Solved(self.solution_word(*only).to_string()),
            _ => GameStatus::InProgress,
        }
    }

    /// Percent confidence of the recommendation
    ///
    /// Strategic play counts on identifying the answer next turn, so it
    /// reports 100; greedy reports the chance of a direct hit.
    #[must_use]
    pub fn confidence(&self) -> u32 {
        let remaining = self.candidates.len();
        match (remaining, self.mode) {
            (0, _) => 0,
            (1, _) | (_, SearchMode::Strategic) => 100,
            (n, SearchMode::Greedy) => (100.0 / n as f64).round() as u32,
        }
    }

    /// Short description of how far filtering has come
    #[must_use]
    pub fn remaining_label(&self) -> &'static str {
        let remaining = self.candidates.len();
        if remaining == self.solutions.len() {
            "Full dictionary"
        } else if remaining <= NARROWING_MAX {
            "Narrowing down"
        } else {
            "Filtering..."
        }
    }

    /// Remaining solutions with their win chance, when 2 to 5 are left
    #[must_use]
    pub fn endgame(&self) -> Vec<EndgameEntry> {
        let remaining = self.candidates.len();
        if !(2..=ENDGAME_MAX).contains(&remaining) {
            return Vec::new();
        }

        self.candidates
            .iter()
            .map(|&i| {
                let word = self.solution_word(i).to_string();
                let ranked = self
                    .ranking
                    .as_ref()
                    .and_then(|r| r.candidates.iter().find(|c| c.word == word));
                let win_probability =
                    ranked.map_or_else(|| win_probability(remaining), |c| c.win_probability);
                EndgameEntry {
                    word,
                    win_probability,
                }
            })
            .collect()
    }

    /// Top of the ranking for display, without solutions if hidden
    #[must_use]
    pub fn visible_candidates(&self) -> Vec<&RankedCandidate> {
        let Some(ranking) = &self.ranking else {
            return Vec::new();
        };
        ranking
            .candidates
            .iter()
            .filter(|c| !(self.hide_solutions && c.is_solution))
            .take(VISIBLE_CANDIDATES)
            .collect()
    }

    /// Highest ranked guess
    #[must_use]
    pub fn best_move(&self) -> Option<&str> {
        self.ranking
            .as_ref()
            .and_then(Ranking::best)
            .map(|c| c.word.as_str())
    }

    /// Change mode; the stored ranking no longer applies
    pub fn set_mode(&mut self, mode: SearchMode) {
        if self.mode != mode {
            self.mode = mode;
            self.ranking = None;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn toggle_hide_solutions(&mut self) {
        self.hide_solutions = !self.hide_solutions;
    }

    #[must_use]
    pub const fn hide_solutions(&self) -> bool {
        self.hide_solutions
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    #[must_use]
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Words of the remaining solutions
    #[must_use]
    pub fn remaining_words(&self) -> Vec<&str> {
        self.candidates.iter().map(|&i| self.solution_word(i)).collect()
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessEntry] {
        &self.guesses
    }

    #[must_use]
    pub const fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    fn solution_word(&self, index: usize) -> &str {
        self.solutions.get(index).map_or("?????", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EngineConfig;

    fn engine() -> Engine {
        Engine::init(
            &["irate", "crate", "grate", "slate", "plate", "cigar"],
            &["crane", "slate", "irate", "crate", "grate", "plate", "cigar", "gisco"],
            EngineConfig::default(),
            &mut (),
        )
        .unwrap()
    }

    fn pattern(word: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(word).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn new_session_starts_full() {
        let session = GameSession::for_engine(&engine());
        assert_eq!(session.candidates(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.remaining_label(), "Full dictionary");
        assert_eq!(session.mode(), SearchMode::Strategic);
        assert!(session.needs_ranking());
    }

    #[test]
    fn rejects_words_outside_dictionary() {
        let mut session = GameSession::for_engine(&engine());
        assert_eq!(
            session.submit_guess("qwert"),
            Err(SessionError::NotInDictionary("qwert".to_string()))
        );
        assert!(matches!(
            session.submit_guess("abc"),
            Err(SessionError::InvalidWord(WordError::InvalidLength(3)))
        ));
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn feedback_required_before_next_guess() {
        let mut session = GameSession::for_engine(&engine());
        session.submit_guess("CRANE").unwrap();
        assert_eq!(session.pending_guess(), Some("crane"));
        assert_eq!(
            session.submit_guess("slate"),
            Err(SessionError::FeedbackPending("crane".to_string()))
        );
    }

    #[test]
    fn cancel_pending_only_drops_unanswered_guess() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        session.play(&engine, "crane", pattern("crane", "grate")).unwrap();
        assert_eq!(session.cancel_pending(), None);

        session.submit_guess("slate").unwrap();
        assert_eq!(session.cancel_pending(), Some("slate".to_string()));
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn record_feedback_without_guess_fails() {
        let mut session = GameSession::for_engine(&engine());
        assert_eq!(
            session.record_feedback(Pattern::NONE),
            Err(SessionError::NoPendingGuess)
        );
    }

    #[test]
    fn play_to_solution() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);

        let left = session
            .play(&engine, "crane", pattern("crane", "grate"))
            .unwrap();
        assert!(left >= 1);
        assert!(session.remaining_words().contains(&"grate"));

        session
            .play(&engine, "grate", Pattern::PERFECT)
            .unwrap();
        assert_eq!(session.status(), GameStatus::Solved("grate".to_string()));
        assert!(!session.needs_ranking());
        assert_eq!(session.confidence(), 100);
        assert_eq!(session.submit_guess("slate"), Err(SessionError::GameOver));
    }

    #[test]
    fn contradictory_feedback_is_dead_end() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        session.play(&engine, "gisco", Pattern::PERFECT).unwrap();
        assert_eq!(session.status(), GameStatus::DeadEnd);
        assert_eq!(session.confidence(), 0);
    }

    #[test]
    fn confidence_depends_on_mode() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        assert_eq!(session.confidence(), 100);

        session.set_mode(SearchMode::Greedy);
        assert_eq!(session.confidence(), 17); // round(100 / 6)
    }

    #[test]
    fn endgame_lists_remaining_with_win_chance() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        // slate: irate, crate, grate, plate share "ate" and none has s or l
        session.play(&engine, "slate", pattern("slate", "crate")).unwrap();

        let endgame = session.endgame();
        assert_eq!(endgame.len(), session.candidates().len());
        assert!((2..=ENDGAME_MAX).contains(&endgame.len()));
        for entry in &endgame {
            assert!((entry.win_probability - win_probability(endgame.len())).abs() < 1e-9);
        }
        assert_eq!(session.remaining_label(), "Narrowing down");
    }

    #[test]
    fn ranking_cleared_by_mode_change_and_filter() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        session.refresh_ranking(&engine, &mut ()).unwrap();
        assert!(session.best_move().is_some());
        assert!(!session.needs_ranking());

        session.toggle_mode();
        assert!(session.ranking().is_none());

        session.refresh_ranking(&engine, &mut ()).unwrap();
        assert_eq!(session.ranking().map(|r| r.mode), Some(SearchMode::Greedy));
        session.apply_filtered(vec![0, 1]);
        assert!(session.best_move().is_none());
    }

    #[test]
    fn hide_solutions_filters_visible_list() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        session.refresh_ranking(&engine, &mut ()).unwrap();

        let all = session.visible_candidates().len();
        session.toggle_hide_solutions();
        let burners = session.visible_candidates();
        assert!(burners.len() < all);
        assert!(burners.iter().all(|c| !c.is_solution));
    }

    #[test]
    fn reset_restores_initial_state() {
        let engine = engine();
        let mut session = GameSession::for_engine(&engine);
        session.set_mode(SearchMode::Greedy);
        session.toggle_hide_solutions();
        session.play(&engine, "crane", Pattern::NONE).unwrap();

        session.reset();
        assert_eq!(session.candidates().len(), 6);
        assert!(session.guesses().is_empty());
        assert_eq!(session.mode(), SearchMode::Strategic);
        assert!(!session.hide_solutions());
    }
}

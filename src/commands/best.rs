//! Best-guess command
//!
//! Replays a history of `guess:feedback` pairs and ranks the next guess.

use anyhow::{Context, Result};

use crate::core::Pattern;
use crate::game::{GameSession, GameStatus};
use crate::solver::{Engine, ProgressReporter, Ranking, SearchMode};

/// Ranking after replaying a history
pub struct BestResult {
    pub ranking: Ranking,
    pub remaining: Vec<String>,
    pub status: GameStatus,
    pub confidence: u32,
}

/// Parse one `guess:feedback` history entry, e.g. `crane:--G-Y`
///
/// # Errors
///
/// Returns an error if the separator is missing or the feedback is not five
/// markers.
pub fn parse_history_entry(entry: &str) -> Result<(String, Pattern)> {
    let (guess, feedback) = entry
        .split_once(':')
        .with_context(|| format!("expected guess:feedback, got {entry:?}"))?;
    let pattern = Pattern::from_str(feedback)
        .with_context(|| format!("invalid feedback {feedback:?} (use G/Y/- or emoji)"))?;
    Ok((guess.trim().to_lowercase(), pattern))
}

/// Apply `history` to a fresh game and rank the next guess
///
/// # Errors
///
/// Returns an error if a guess is not in the dictionary or the engine
/// rejects a request.
pub fn best_guesses(
    engine: &Engine,
    history: &[(String, Pattern)],
    mode: SearchMode,
    reporter: &mut dyn ProgressReporter,
) -> Result<BestResult> {
    let mut session = GameSession::for_engine(engine);
    session.set_mode(mode);

    for (guess, pattern) in history {
        session
            .play(engine, guess, *pattern)
            .with_context(|| format!("replaying {guess}"))?;
    }

    let ranking = session.refresh_ranking(engine, reporter)?.clone();

    Ok(BestResult {
        ranking,
        remaining: session
            .remaining_words()
            .into_iter()
            .map(str::to_string)
            .collect(),
        status: session.status(),
        confidence: session.confidence(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EngineConfig;

    fn engine() -> Engine {
        Engine::init(
            &["irate", "crate", "grate", "slate", "plate"],
            &["crane", "slate", "irate", "crate", "grate", "plate", "gisco"],
            EngineConfig::default(),
            &mut (),
        )
        .unwrap()
    }

    #[test]
    fn parse_entry() {
        let (guess, pattern) = parse_history_entry("CRANE:--G-G").unwrap();
        assert_eq!(guess, "crane");
        assert_eq!(pattern.to_letters(), "--G-G");
    }

    #[test]
    fn parse_entry_rejects_bad_input() {
        assert!(parse_history_entry("crane").is_err());
        assert!(parse_history_entry("crane:GGG").is_err());
        assert!(parse_history_entry("crane:GGGGX").is_err());
    }

    #[test]
    fn empty_history_ranks_everything() {
        let engine = engine();
        let result = best_guesses(&engine, &[], SearchMode::Strategic, &mut ()).unwrap();
        assert_eq!(result.remaining.len(), 5);
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(result.ranking.searched_count, 7);
    }

    #[test]
    fn history_narrows_candidates() {
        let engine = engine();
        // slate vs crate: s and l absent, "ate" exact
        let history = vec![parse_history_entry("slate:--GGG").unwrap()];
        let result = best_guesses(&engine, &history, SearchMode::Greedy, &mut ()).unwrap();

        assert_eq!(result.remaining, vec!["irate", "crate", "grate"]);
        assert!(result.ranking.candidates.iter().all(|c| c.is_solution));
        assert_eq!(result.confidence, 33);
    }

    #[test]
    fn unknown_history_word_fails() {
        let engine = engine();
        let history = vec![("qwert".to_string(), Pattern::NONE)];
        assert!(best_guesses(&engine, &history, SearchMode::Strategic, &mut ()).is_err());
    }
}

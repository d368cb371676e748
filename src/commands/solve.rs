//! Word solving command
//!
//! Plays against a known target, always taking the top recommendation, and
//! returns the solution path.

use anyhow::{Context, Result, bail};

use crate::core::{Pattern, Word};
use crate::game::{GameSession, GameStatus};
use crate::solver::{Engine, ProgressReporter, SearchMode};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub mode: SearchMode,
    /// Forced first guess instead of ranking the full solution list
    pub opening: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            mode: SearchMode::Strategic,
            opening: None,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<String>) -> Self {
        self.opening = opening;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub mode: SearchMode,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Raw entropy from the ranking, `None` for a forced opening
    pub raw_entropy: Option<f64>,
    pub win_probability: f64,
    pub is_solution: bool,
}

/// Solve a specific word by following the engine's recommendations
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the solution list
/// - A forced opening is not in the dictionary
/// - The ranking comes back empty
pub fn solve_word(
    engine: &Engine,
    config: SolveConfig,
    reporter: &mut dyn ProgressReporter,
) -> Result<SolveResult> {
    let target = Word::new(&config.target).context("invalid target word")?;
    if engine.solution_index(target.text()).is_none() {
        bail!("target {:?} is not in the solution list", target.text());
    }
    let opening = config
        .opening
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid opening word")?;

    let mut session = GameSession::for_engine(engine);
    session.set_mode(config.mode);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let candidates_before = session.candidates().len();

        let step = match (&opening, session.status()) {
            (_, GameStatus::DeadEnd) => bail!("no candidates remaining"),
            // One candidate left: it is the answer, no ranking needed
            (_, GameStatus::Solved(word)) => GuessStep {
                word,
                pattern: Pattern::PERFECT,
                candidates_before,
                candidates_after: candidates_before,
                raw_entropy: Some(0.0),
                win_probability: 100.0,
                is_solution: true,
            },
            (Some(opening), GameStatus::InProgress) if turn == 0 => {
                let pattern = Pattern::calculate(opening, &target);
                let candidates_after = session.play(engine, opening.text(), pattern)?;
                GuessStep {
                    word: opening.text().to_string(),
                    pattern,
                    candidates_before,
                    candidates_after,
                    raw_entropy: None,
                    win_probability: 0.0,
                    is_solution: engine.solution_index(opening.text()).is_some(),
                }
            }
            (_, GameStatus::InProgress) => {
                let best = session
                    .refresh_ranking(engine, reporter)?
                    .best()
                    .cloned()
                    .context("no candidates remaining")?;
                let pattern = feedback(&best.word, &target)?;
                let candidates_after = session.play(engine, &best.word, pattern)?;
                GuessStep {
                    word: best.word,
                    pattern,
                    candidates_before,
                    candidates_after,
                    raw_entropy: Some(best.raw_entropy),
                    win_probability: best.win_probability,
                    is_solution: best.is_solution,
                }
            }
        };

        let solved = step.pattern.is_perfect();
        guesses.push(step);
        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
                mode: config.mode,
            });
        }
    }

    // Failed to solve
    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
        mode: config.mode,
    })
}

fn feedback(guess: &str, target: &Word) -> Result<Pattern> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    Ok(Pattern::calculate(&guess, target))
}

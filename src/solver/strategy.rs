//! Ranking modes
//!
//! A mode decides which dictionary rows are scored and how much a guess is
//! rewarded for being a possible answer itself.

use std::fmt;
use std::str::FromStr;

use super::config::EngineConfig;

/// Bonus added to a solution guess in strategic mode
const STRATEGIC_TIE_BREAK: f64 = 0.01;

/// Guess-ranking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// Maximize information; solution guesses only win ties
    #[default]
    Strategic,
    /// Only remaining solutions are scored, strongly favoring a win now
    Greedy,
}

impl SearchMode {
    /// Create mode from name string
    ///
    /// Supported names: "strategic", "greedy".
    /// Defaults to strategic if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strategic => "strategic",
            Self::Greedy => "greedy",
        }
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Strategic => Self::Greedy,
            Self::Greedy => Self::Strategic,
        }
    }

    /// Score bonus for a guess that is still a possible solution
    ///
    /// Greedy adds `log2(remaining)`, enough to lift any possible answer
    /// above burner words. Strategic adds a tie-breaker only, so a burner
    /// with strictly higher raw entropy always ranks first.
    #[must_use]
    pub fn win_bonus(self, remaining: usize) -> f64 {
        match self {
            Self::Greedy => (remaining as f64).log2(),
            Self::Strategic => STRATEGIC_TIE_BREAK,
        }
    }

    /// Dictionary rows scored for a ranking pass
    ///
    /// `solution_rows` holds the dictionary row of each remaining solution
    /// that is itself a legal guess, in candidate order.
    ///
    /// Strategic search over more than `sample_threshold` candidates scores
    /// only the first `sample_cap` dictionary rows. This trades accuracy for
    /// speed and can miss the true best opener.
    #[must_use]
    pub fn search_space(
        self,
        dictionary_len: usize,
        remaining: usize,
        solution_rows: &[usize],
        config: &EngineConfig,
    ) -> Vec<usize> {
        match self {
            Self::Greedy => solution_rows.to_vec(),
            Self::Strategic if remaining > config.sample_threshold => {
                (0..dictionary_len.min(config.sample_cap)).collect()
            }
            Self::Strategic => (0..dictionary_len).collect(),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized mode name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search mode {0:?} (expected \"strategic\" or \"greedy\")")]
pub struct UnknownMode(pub String);

impl FromStr for SearchMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strategic" | "hard" | "explore" => Ok(Self::Strategic),
            "greedy" | "easy" | "win" => Ok(Self::Greedy),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

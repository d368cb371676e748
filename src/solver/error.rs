//! Engine error taxonomy
//!
//! Only conditions the caller must not ignore are errors. An empty ranking
//! (dead end) and the unknown-guess pass-through in filter are values.

use crate::core::WordError;
use std::fmt;
use thiserror::Error;

/// Which input list a word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordList {
    Solutions,
    Dictionary,
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solutions => "solution list",
            Self::Dictionary => "dictionary",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A word failed validation while building the matrix
    #[error("malformed word {word:?} at index {index} of the {list}: {source}")]
    MalformedWord {
        list: WordList,
        index: usize,
        word: String,
        #[source]
        source: WordError,
    },

    /// Filter or rank was requested before the engine was ready
    #[error("engine is not initialized; send init and wait for ready first")]
    NotInitialized,

    /// Init was requested on an engine that is already built
    #[error("engine is already initialized")]
    AlreadyInitialized,

    /// Filter guess missing from the dictionary (strict mode only)
    #[error("guess {0:?} is not in the dictionary")]
    UnknownGuess(String),

    /// A candidate index does not address a solution
    #[error("candidate index {index} is out of range for {len} solutions")]
    CandidateOutOfRange { index: usize, len: usize },

    /// The worker thread is gone
    #[error("engine worker has shut down")]
    WorkerDisconnected,
}

//! Game session state
//!
//! Owns the candidate set between engine calls.

mod session;

pub use session::{
    ENDGAME_MAX, EndgameEntry, GameSession, GameStatus, GuessEntry, SessionError,
    VISIBLE_CANDIDATES,
};

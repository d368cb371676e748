//! Core domain types for Wordle
//!
//! Words and feedback patterns. Everything here is pure and has no
//! knowledge of word lists or the pattern matrix.

mod pattern;
mod word;

pub use pattern::{Mark, PATTERN_COUNT, Pattern};
pub use word::{WORD_LEN, Word, WordError};

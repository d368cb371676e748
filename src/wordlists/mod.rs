//! Word lists for Wordle solving
//!
//! Reduced default solution list and guess dictionary are compiled into the
//! binary; `loader` reads full-size replacements from disk.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

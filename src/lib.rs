//! Wordle Matrix
//!
//! A Wordle assistant built on a precomputed pattern matrix. Every
//! (dictionary word, solution) pair is scored once up front; filtering and
//! entropy ranking then run on plain byte lookups.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_matrix::core::Pattern;
//! use wordle_matrix::solver::{Engine, EngineConfig, SearchMode};
//!
//! let solutions = ["crane", "slate", "irate"];
//! let dictionary = ["crane", "slate", "irate", "soare"];
//! let engine = Engine::init(&solutions, &dictionary, EngineConfig::default(), &mut ()).unwrap();
//!
//! let remaining = engine
//!     .filter("crane", Pattern::from_str("--G-G").unwrap(), &engine.full_range())
//!     .unwrap();
//! let ranking = engine.find_best(&remaining, SearchMode::Strategic, &mut ()).unwrap();
//! println!("next guess: {:?}", ranking.best().map(|c| &c.word));
//! ```

// Core domain types
pub mod core;

// Pattern matrix, filtering and ranking
pub mod solver;

// Caller-side game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

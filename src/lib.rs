//! hold'gram
//!
//! A daily word-ladder puzzle played with cards. Each day selects a path of
//! anagram rounds from a catalog; every round's answer is an anagram of the
//! face-up cards, and solving a round turns the next card face-up.
//!
//! # Quick Start
//!
//! ```rust
//! use holdgram::catalog::DayIndex;
//! use holdgram::core::Path;
//! use holdgram::game::Session;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let path = Path::parse("{art, rat, tar} + e -> {rate, tear}").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::deal(1, path, &DayIndex::new(0, 0), &mut rng);
//!
//! session.submit_guess("rat");
//! session.submit_guess("tear");
//! assert!(session.state().won);
//! ```

// Core domain types
pub mod core;

// Puzzle catalog and daily selection
pub mod catalog;

// Game engine and session
pub mod game;

// Catalog generation from word lists
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

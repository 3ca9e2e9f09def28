//! Figgerits
//!
//! A cryptogram puzzle: every letter of a hidden phrase is replaced by a number,
//! and riddles whose answers share those numbers help the player decode it.
//!
//! # Quick Start
//!
//! ```rust
//! use figgerits::core::{Clue, MatchResult, PuzzleContent};
//! use figgerits::session::PuzzleSession;
//!
//! let mut session = PuzzleSession::with_content(PuzzleContent {
//!     phrase: "BAD DAB".to_string(),
//!     clues: vec![Clue::new("Not good", "BAD", 1)],
//! });
//!
//! session.set_guess(1, Some('b')).unwrap();
//! session.set_guess(2, Some('a')).unwrap();
//! assert_eq!(session.set_guess(3, Some('d')).unwrap(), MatchResult::Win);
//! ```

// Core puzzle logic
pub mod core;

// Puzzle lifecycle
pub mod session;

// Puzzle sources
pub mod provider;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

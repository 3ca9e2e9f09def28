//! Puzzle session state
//!
//! A `PuzzleSession` owns everything that belongs to one puzzle: the phrase,
//! both letter mappings with their shared counter, the guess ledger, the board
//! and the current match result. Starting a new puzzle replaces all of it at once.

mod state;
mod stats;

pub use state::{LoadOutcome, LoadTicket, Phase, PuzzleSession, SessionError};
pub use stats::Statistics;

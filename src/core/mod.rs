//! Core puzzle logic
//!
//! Letter numbering, the guess ledger and win detection. Everything here is pure
//! and synchronous; the session module wires it together.

mod allocator;
mod board;
mod evaluator;
mod ledger;
mod mapping;
mod puzzle;

pub use allocator::NumberAllocator;
pub use board::{Board, ClueRow, Glyph, GlyphPos};
pub use evaluator::{MatchResult, evaluate};
pub use ledger::{GuessError, GuessLedger, parse_guess};
pub use mapping::{CanonicalMapping, ExtraMapping, LetterMapping, assign, fold_letter, is_letter};
pub use puzzle::{Clue, Phrase, PuzzleContent};

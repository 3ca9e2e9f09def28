//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the `show` command.

pub mod display;
pub mod formatters;

pub use display::{print_clues, print_cryptogram, print_phrase, print_result, print_solution};

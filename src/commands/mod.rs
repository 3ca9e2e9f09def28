//! Command implementations

pub mod show;
pub mod simple;

pub use show::{prepare_puzzle, show_puzzle};
pub use simple::run_simple;

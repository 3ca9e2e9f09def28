//! Puzzle preview command
//!
//! Fetches one puzzle and prints it encoded, optionally with its solution.

use crate::output::{print_clues, print_cryptogram, print_phrase, print_solution};
use crate::provider::{ContentFetchError, PuzzleProvider};
use crate::session::PuzzleSession;

/// Fetch a puzzle and lay it out as a session would
///
/// # Errors
///
/// Returns `ContentFetchError` if the provider fails.
pub fn prepare_puzzle(provider: &dyn PuzzleProvider) -> Result<PuzzleSession, ContentFetchError> {
    let content = provider.fetch()?;
    Ok(PuzzleSession::with_content(content))
}

/// Print a freshly fetched puzzle
///
/// # Errors
///
/// Returns `ContentFetchError` if the provider fails.
pub fn show_puzzle(provider: &dyn PuzzleProvider, reveal: bool) -> Result<(), ContentFetchError> {
    let session = prepare_puzzle(provider)?;

    print_cryptogram(&session);
    print_phrase(&session);
    print_clues(&session);
    if reveal {
        print_solution(&session);
    }

    Ok(())
}

//! Puzzle content providers
//!
//! A provider hands out one [`PuzzleContent`] per fetch. The shipped providers
//! read JSON documents, either the catalog embedded in the binary or a file on
//! disk. Fetches run off the UI thread through [`PuzzleLoader`].

mod catalog;
mod file;
mod loader;

pub use catalog::CatalogProvider;
pub use file::FileProvider;
pub use loader::{LoadResponse, PuzzleLoader};

use crate::core::PuzzleContent;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::Deserialize;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Failure to obtain puzzle content
#[derive(Error, Debug)]
pub enum ContentFetchError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed puzzle document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{0} holds no puzzles")]
    Empty(String),
}

/// Source of puzzles
pub trait PuzzleProvider: Send + Sync {
    /// Short human-readable name, used in logs
    fn describe(&self) -> String;

    /// Produce a new puzzle
    ///
    /// # Errors
    /// Returns `ContentFetchError` when the content cannot be read or parsed.
    fn fetch(&self) -> Result<PuzzleContent, ContentFetchError>;
}

/// Either a single puzzle or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum PuzzleDocument {
    One(PuzzleContent),
    Many(Vec<PuzzleContent>),
}

/// Parse a JSON document holding one puzzle or an array of puzzles
///
/// # Errors
/// Returns `serde_json::Error` when the text matches neither shape.
pub fn parse_document(json: &str) -> Result<Vec<PuzzleContent>, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        PuzzleDocument::One(content) => vec![content],
        PuzzleDocument::Many(contents) => contents,
    })
}

/// Random picker shared by the providers
struct Picker {
    rng: Mutex<StdRng>,
}

impl Picker {
    fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, puzzles: &[PuzzleContent]) -> Option<PuzzleContent> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        puzzles.choose(&mut *rng).cloned()
    }
}

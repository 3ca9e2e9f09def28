//! Puzzles compiled into the binary

use super::{ContentFetchError, Picker, PuzzleProvider, parse_document};
use crate::core::PuzzleContent;

const EMBEDDED_CATALOG: &str = include_str!("../../data/puzzles.json");

/// Picks a random puzzle from an in-memory catalog
pub struct CatalogProvider {
    puzzles: Vec<PuzzleContent>,
    picker: Picker,
}

impl CatalogProvider {
    /// Catalog shipped with the game
    ///
    /// `seed` makes the sequence of picks reproducible.
    ///
    /// # Errors
    /// Returns `ContentFetchError` if the embedded catalog fails to parse or is empty.
    pub fn embedded(seed: Option<u64>) -> Result<Self, ContentFetchError> {
        Self::from_json("embedded catalog", EMBEDDED_CATALOG, seed)
    }

    /// Catalog parsed from a JSON document
    ///
    /// # Errors
    /// Returns `ContentFetchError::Malformed` for invalid JSON and
    /// `ContentFetchError::Empty` when the document holds no puzzles.
    pub fn from_json(name: &str, json: &str, seed: Option<u64>) -> Result<Self, ContentFetchError> {
        let puzzles = parse_document(json)?;
        if puzzles.is_empty() {
            return Err(ContentFetchError::Empty(name.to_string()));
        }
        log::debug!("{name}: {} puzzles", puzzles.len());
        Ok(Self {
            puzzles,
            picker: Picker::new(seed),
        })
    }
}

impl PuzzleProvider for CatalogProvider {
    fn describe(&self) -> String {
        format!("catalog of {} puzzles", self.puzzles.len())
    }

    fn fetch(&self) -> Result<PuzzleContent, ContentFetchError> {
        self.picker
            .pick(&self.puzzles)
            .ok_or_else(|| ContentFetchError::Empty(self.describe()))
    }
}

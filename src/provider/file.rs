//! Puzzles read from a JSON file
//!
//! The file is read on every fetch, so a generator writing new content to the
//! same path is picked up by the next "new puzzle".

use super::{ContentFetchError, Picker, PuzzleProvider, parse_document};
use crate::core::PuzzleContent;
use std::fs;
use std::path::PathBuf;

pub struct FileProvider {
    path: PathBuf,
    picker: Picker,
}

impl FileProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            path: path.into(),
            picker: Picker::new(seed),
        }
    }
}

impl PuzzleProvider for FileProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<PuzzleContent, ContentFetchError> {
        let json = fs::read_to_string(&self.path).map_err(|source| ContentFetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        let puzzles = parse_document(&json)?;
        self.picker
            .pick(&puzzles)
            .ok_or_else(|| ContentFetchError::Empty(self.describe()))
    }
}

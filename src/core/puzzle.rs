//! Puzzle content: the secret phrase and its clues

use serde::{Deserialize, Serialize};

/// A riddle whose answer reveals some of the phrase's letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub statement: String,
    pub answer: String,
    /// Carried through for display only; matching never reads it
    #[serde(default)]
    pub index: i64,
}

impl Clue {
    #[must_use]
    pub fn new(statement: impl Into<String>, answer: impl Into<String>, index: i64) -> Self {
        Self {
            statement: statement.into(),
            answer: answer.into(),
            index,
        }
    }
}

/// One puzzle as delivered by a content provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleContent {
    pub phrase: String,
    #[serde(default)]
    pub clues: Vec<Clue>,
}

/// The secret phrase, split into words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    words: Vec<String>,
}

impl Phrase {
    /// Split `text` on single spaces, dropping the empty words left by runs of spaces
    ///
    /// # Examples
    /// ```
    /// use figgerits::core::Phrase;
    ///
    /// let phrase = Phrase::new("REACT IS  FUN");
    /// assert_eq!(phrase.words(), ["REACT", "IS", "FUN"]);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = text
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        Self { text, words }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_splits_words() {
        let phrase = Phrase::new("GRAVITY IS NOT RESPONSIBLE");
        assert_eq!(phrase.words().len(), 4);
        assert_eq!(phrase.words()[0], "GRAVITY");
        assert_eq!(phrase.text(), "GRAVITY IS NOT RESPONSIBLE");
    }

    #[test]
    fn empty_phrase_has_no_words() {
        assert!(Phrase::new("").is_empty());
        assert!(Phrase::new("   ").is_empty());
    }

    #[test]
    fn content_parses_provider_document() {
        let json = r#"{
            "phrase": "REACT IS FUN",
            "clues": [
                { "statement": "A large body of saltwater.", "answer": "OCEAN", "index": 4 }
            ]
        }"#;
        let content: PuzzleContent = serde_json::from_str(json).unwrap();

        assert_eq!(content.phrase, "REACT IS FUN");
        assert_eq!(content.clues, vec![Clue::new("A large body of saltwater.", "OCEAN", 4)]);
    }

    #[test]
    fn content_ignores_unknown_fields() {
        let json = r#"{
            "puzzleId": "98765",
            "phrase": "NO CLUES",
            "cryptogram": "12 3456",
            "solution": { "1": "N" }
        }"#;
        let content: PuzzleContent = serde_json::from_str(json).unwrap();
        assert!(content.clues.is_empty());
    }

    #[test]
    fn clue_index_defaults_to_zero() {
        let clue: Clue = serde_json::from_str(r#"{ "statement": "s", "answer": "a" }"#).unwrap();
        assert_eq!(clue.index, 0);
    }
}

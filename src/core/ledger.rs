//! Player guesses, keyed by number
//!
//! One entry per number, shared by every glyph that shows that number.

use super::mapping::{fold_letter, is_letter};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Rejected guess input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("a guess is a single letter, got \"{0}\"")]
    NotSingleCharacter(String),
}

/// Parse raw input into a guess
///
/// Empty (or whitespace-only) input means "clear the guess".
///
/// # Errors
/// Returns `GuessError` for more than one character or a non-letter.
///
/// # Examples
/// ```
/// use figgerits::core::parse_guess;
///
/// assert_eq!(parse_guess("Q"), Ok(Some('q')));
/// assert_eq!(parse_guess(""), Ok(None));
/// assert!(parse_guess("7").is_err());
/// ```
pub fn parse_guess(input: &str) -> Result<Option<char>, GuessError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => validate(c).map(Some),
        (Some(_), Some(_)) => Err(GuessError::NotSingleCharacter(trimmed.to_string())),
    }
}

fn validate(c: char) -> Result<char, GuessError> {
    if is_letter(c) {
        Ok(fold_letter(c))
    } else {
        Err(GuessError::NotALetter(c))
    }
}

/// Current guess for each number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLedger {
    guesses: FxHashMap<u32, char>,
}

impl GuessLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the guess for `number`, or clear it with `None`
    ///
    /// Letters are stored lowercase. A non-letter leaves the ledger unchanged.
    ///
    /// # Errors
    /// Returns `GuessError::NotALetter` for non-alphabetic input.
    pub fn set(&mut self, number: u32, guess: Option<char>) -> Result<(), GuessError> {
        match guess {
            Some(c) => {
                let letter = validate(c)?;
                self.guesses.insert(number, letter);
            }
            None => {
                self.guesses.remove(&number);
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, number: u32) -> Option<char> {
        self.guesses.get(&number).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    pub fn clear(&mut self) {
        self.guesses.clear();
    }

    /// Iterate `(number, letter)` entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (u32, char)> + '_ {
        self.guesses.iter().map(|(&number, &letter)| (number, letter))
    }

    /// Copy of the ledger without the entries `exclude` returns true for
    #[must_use]
    pub fn without(&self, mut exclude: impl FnMut(u32) -> bool) -> Self {
        Self {
            guesses: self
                .guesses
                .iter()
                .filter(|(number, _)| !exclude(**number))
                .map(|(&number, &letter)| (number, letter))
                .collect(),
        }
    }
}

impl FromIterator<(u32, char)> for GuessLedger {
    /// Build a ledger from raw entries, skipping non-letters
    fn from_iter<I: IntoIterator<Item = (u32, char)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (number, letter) in iter {
            let _ = ledger.set(number, Some(letter));
        }
        ledger
    }
}

//! Letter to number substitution
//!
//! A `LetterMapping` records which number stands for which letter. The canonical
//! mapping of a puzzle is derived from its phrase by [`assign`]; clue-only letters
//! live in a second mapping owned by the [`NumberAllocator`](super::NumberAllocator).

use rustc_hash::FxHashMap;
use std::fmt;

/// Fold a character to the lowercase form used as mapping key
///
/// Letters with a multi-character lowercase form keep their first character.
#[inline]
#[must_use]
pub fn fold_letter(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Whether a character takes part in the substitution
#[inline]
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Mapping from lowercase letter to a positive number
///
/// Letters are kept in insertion order, which is also increasing number order
/// for every mapping built by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMapping {
    numbers: FxHashMap<char, u32>,
    order: Vec<char>,
}

/// Mapping derived from the secret phrase
pub type CanonicalMapping = LetterMapping;

/// Mapping for letters that only appear in clue answers
pub type ExtraMapping = LetterMapping;

impl LetterMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number assigned to `letter`, compared case-insensitively
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<u32> {
        self.numbers.get(&fold_letter(letter)).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.numbers.contains_key(&fold_letter(letter))
    }

    /// Whether any letter maps to `number`
    #[must_use]
    pub fn contains_number(&self, number: u32) -> bool {
        self.numbers.values().any(|&n| n == number)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(letter, number)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.order
            .iter()
            .map(|letter| (*letter, self.numbers[letter]))
    }

    /// Inverse view: number to letter
    #[must_use]
    pub fn inverse(&self) -> FxHashMap<u32, char> {
        self.iter().map(|(letter, number)| (number, letter)).collect()
    }

    /// Smallest number greater than every number in the mapping
    #[must_use]
    pub fn next_number(&self) -> u32 {
        self.numbers.values().max().map_or(1, |max| max + 1)
    }

    /// Record `letter -> number`, keeping an existing entry untouched
    ///
    /// Returns the number the letter maps to after the call.
    pub(crate) fn insert(&mut self, letter: char, number: u32) -> u32 {
        let letter = fold_letter(letter);
        if let Some(&existing) = self.numbers.get(&letter) {
            return existing;
        }
        self.numbers.insert(letter, number);
        self.order.push(letter);
        number
    }

    pub(crate) fn clear(&mut self) {
        self.numbers.clear();
        self.order.clear();
    }
}

impl fmt::Display for LetterMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (letter, number)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}:{number}")?;
        }
        write!(f, "}}")
    }
}

/// Derive the canonical mapping of a phrase
///
/// Scans left to right and gives every letter not seen before the next number,
/// starting at 1. Repeated letters keep their first number, so every occurrence
/// of a letter decodes the same way. Spaces and other non-letters never receive
/// a number.
///
/// # Examples
/// ```
/// use figgerits::core::assign;
///
/// let mapping = assign("BAD DAB");
/// assert_eq!(mapping.get('b'), Some(1));
/// assert_eq!(mapping.get('a'), Some(2));
/// assert_eq!(mapping.get('d'), Some(3));
/// assert_eq!(mapping.len(), 3);
/// ```
#[must_use]
pub fn assign(phrase: &str) -> CanonicalMapping {
    let mut mapping = LetterMapping::new();
    let mut next = 1;

    for c in phrase.chars().filter(|&c| is_letter(c)) {
        if !mapping.contains(c) {
            mapping.insert(c, next);
            next += 1;
        }
    }

    mapping
}

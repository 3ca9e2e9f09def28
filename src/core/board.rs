//! Glyph layout for the phrase and clue answers
//!
//! Every letter slot on screen is a glyph bound to a number. Glyphs that share a
//! number share a guess.

use super::allocator::NumberAllocator;
use super::mapping::{CanonicalMapping, fold_letter, is_letter};
use super::puzzle::{Clue, Phrase};

/// One rendered slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A letter hidden behind its number
    Letter { letter: char, number: u32 },
    /// Punctuation, the space between answer words, or any other non-letter,
    /// shown as-is
    Fixed(char),
}

impl Glyph {
    /// Number carried by the glyph, if it is a letter slot
    #[inline]
    #[must_use]
    pub const fn number(self) -> Option<u32> {
        match self {
            Self::Letter { number, .. } => Some(number),
            Self::Fixed(_) => None,
        }
    }
}

/// A clue with the glyphs of its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueRow {
    pub clue: Clue,
    pub glyphs: Vec<Glyph>,
}

/// Position of a glyph on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphPos {
    /// `(word, offset)` within the phrase
    Phrase(usize, usize),
    /// `(clue, offset)` within a clue answer
    Clue(usize, usize),
}

/// Phrase words and clue answers laid out as glyphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    words: Vec<Vec<Glyph>>,
    clues: Vec<ClueRow>,
}

impl Board {
    /// Lay out phrase and clues, phrase first
    ///
    /// Letters found in `canonical` take its number; any other letter gets one
    /// from `allocator`, so clue-only letters are numbered in reading order.
    pub fn layout(
        phrase: &Phrase,
        clues: &[Clue],
        canonical: &CanonicalMapping,
        allocator: &mut NumberAllocator,
    ) -> Self {
        let mut glyphs_of = |text: &str| -> Vec<Glyph> {
            text.chars()
                .map(|c| {
                    if !is_letter(c) {
                        return Glyph::Fixed(c);
                    }
                    let number = canonical
                        .get(c)
                        .unwrap_or_else(|| allocator.allocate(c));
                    Glyph::Letter {
                        letter: fold_letter(c),
                        number,
                    }
                })
                .collect()
        };

        let words = phrase.words().iter().map(|word| glyphs_of(word.as_str())).collect();
        let clues = clues
            .iter()
            .map(|clue| ClueRow {
                glyphs: glyphs_of(clue.answer.as_str()),
                clue: clue.clone(),
            })
            .collect();

        Self { words, clues }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Vec<Glyph>] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[ClueRow] {
        &self.clues
    }

    #[must_use]
    pub fn glyph(&self, pos: GlyphPos) -> Option<Glyph> {
        match pos {
            GlyphPos::Phrase(word, offset) => self.words.get(word)?.get(offset).copied(),
            GlyphPos::Clue(clue, offset) => self.clues.get(clue)?.glyphs.get(offset).copied(),
        }
    }

    /// Every glyph position in reading order: phrase words, then clues
    pub fn positions(&self) -> impl Iterator<Item = (GlyphPos, Glyph)> + '_ {
        let phrase = self.words.iter().enumerate().flat_map(|(w, glyphs)| {
            glyphs
                .iter()
                .enumerate()
                .map(move |(o, g)| (GlyphPos::Phrase(w, o), *g))
        });
        let clues = self.clues.iter().enumerate().flat_map(|(c, row)| {
            row.glyphs
                .iter()
                .enumerate()
                .map(move |(o, g)| (GlyphPos::Clue(c, o), *g))
        });
        phrase.chain(clues)
    }

    /// Positions of letter glyphs only, in reading order
    #[must_use]
    pub fn letter_positions(&self) -> Vec<GlyphPos> {
        self.positions()
            .filter(|(_, glyph)| glyph.number().is_some())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Positions of the glyphs showing `number`
    #[must_use]
    pub fn glyphs_with(&self, number: u32) -> Vec<GlyphPos> {
        self.positions()
            .filter(|(_, glyph)| glyph.number() == Some(number))
            .map(|(pos, _)| pos)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.clues.is_empty()
    }
}

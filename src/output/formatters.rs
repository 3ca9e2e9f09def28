//! Formatting utilities for terminal output

use crate::core::{Glyph, GuessLedger, LetterMapping};

/// Placeholder shown for a number nobody has guessed yet
pub const BLANK: char = '_';

/// Width of one glyph cell: widest number plus one space of padding
#[must_use]
pub fn cell_width(glyphs: &[Glyph]) -> usize {
    glyphs
        .iter()
        .filter_map(|g| g.number())
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(1)
        + 1
}

/// Text shown in the letter row for one glyph
#[must_use]
pub fn glyph_letter(glyph: Glyph, ledger: &GuessLedger) -> char {
    match glyph {
        Glyph::Letter { number, .. } => ledger
            .get(number)
            .map_or(BLANK, |c| c.to_uppercase().next().unwrap_or(c)),
        Glyph::Fixed(c) => c,
    }
}

/// Letter row and number row for a run of glyphs, cells right-aligned
///
/// ```text
///   _  A  _
///   1  2  3
/// ```
#[must_use]
pub fn glyph_rows(glyphs: &[Glyph], ledger: &GuessLedger) -> (String, String) {
    let width = cell_width(glyphs);
    let mut letters = String::new();
    let mut numbers = String::new();

    for &glyph in glyphs {
        let letter = glyph_letter(glyph, ledger);
        let number = glyph.number().map(|n| n.to_string()).unwrap_or_default();
        letters.push_str(&format!("{letter:>width$}"));
        numbers.push_str(&format!("{number:>width$}"));
    }

    (letters, numbers)
}

/// Numbers of a word joined with dashes, fixed glyphs kept as-is
#[must_use]
pub fn encode_word(glyphs: &[Glyph]) -> String {
    glyphs
        .iter()
        .map(|glyph| match glyph {
            Glyph::Letter { number, .. } => number.to_string(),
            Glyph::Fixed(c) => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// One `LETTER=number` pair per entry, in number order
#[must_use]
pub fn mapping_pairs(mapping: &LetterMapping) -> Vec<String> {
    let mut pairs: Vec<(char, u32)> = mapping.iter().collect();
    pairs.sort_by_key(|&(_, number)| number);
    pairs
        .into_iter()
        .map(|(letter, number)| format!("{}={number}", letter.to_uppercase()))
        .collect()
}

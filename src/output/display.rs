//! Colored printing of puzzles and results

use super::formatters::{encode_word, glyph_rows, mapping_pairs};
use crate::core::{Glyph, MatchResult};
use crate::session::PuzzleSession;
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Print the phrase as letter/number rows, a few words per line
pub fn print_phrase(session: &PuzzleSession) {
    println!("\n{}", "═".repeat(RULE_WIDTH).cyan());

    let mut line: Vec<Glyph> = Vec::new();
    for word in session.board().words() {
        if !line.is_empty() && line.len() + word.len() > 14 {
            print_glyph_line(&line, session);
            line.clear();
        }
        if !line.is_empty() {
            line.push(Glyph::Fixed(' '));
        }
        line.extend_from_slice(word);
    }
    if !line.is_empty() {
        print_glyph_line(&line, session);
    }

    println!("{}", "═".repeat(RULE_WIDTH).cyan());
}

fn print_glyph_line(glyphs: &[Glyph], session: &PuzzleSession) {
    let (letters, numbers) = glyph_rows(glyphs, session.ledger());
    println!("  {}", letters.bright_white().bold());
    println!("  {}", numbers.bright_black());
}

/// Print every clue with its answer glyphs
pub fn print_clues(session: &PuzzleSession) {
    for (i, row) in session.board().clues().iter().enumerate() {
        println!(
            "\n{} {} {}",
            format!("{}.", i + 1).bright_cyan().bold(),
            row.clue.statement,
            format!("(#{})", row.clue.index).bright_black()
        );
        let (letters, numbers) = glyph_rows(&row.glyphs, session.ledger());
        println!("   {}", letters.bright_white());
        println!("   {}", numbers.bright_black());
    }
    println!();
}

/// Print the phrase as dashed number groups
pub fn print_cryptogram(session: &PuzzleSession) {
    let encoded: Vec<String> = session
        .board()
        .words()
        .iter()
        .map(|word| encode_word(word))
        .collect();
    println!("\n{} {}", "Cryptogram:".bright_cyan().bold(), encoded.join("   "));
}

/// Print the solution mapping and the extra numbers
pub fn print_solution(session: &PuzzleSession) {
    println!(
        "\n{} {}",
        "Phrase:".bright_cyan().bold(),
        session.phrase().text().bright_yellow().bold()
    );
    println!(
        "{} {}",
        "Solution:".bright_cyan().bold(),
        mapping_pairs(session.canonical()).join("  ")
    );
    if !session.extra().is_empty() {
        println!(
            "{} {}",
            "Clue only:".bright_cyan().bold(),
            mapping_pairs(session.extra()).join("  ").bright_black()
        );
    }
}

/// Print the verdict after a guess
pub fn print_result(result: MatchResult) {
    match result {
        MatchResult::Undetermined => {}
        MatchResult::Win => {
            println!("\n{}", "═".repeat(RULE_WIDTH).bright_cyan());
            println!(
                "{}",
                "      🎉  P H R A S E   D E C O D E D !  🎉      "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(RULE_WIDTH).bright_cyan());
        }
        MatchResult::Mismatch => {
            println!(
                "\n{}",
                "❌ Every number has a letter, but some are wrong."
                    .red()
                    .bold()
            );
            println!("Type 'retry' to clear your guesses or 'new' for another puzzle.");
        }
    }
}

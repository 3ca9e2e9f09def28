//! Win detection
//!
//! Reconciles the player's guesses with the canonical mapping. Only numbers that
//! belong to the phrase count; numbers handed out for clue-only letters exist to
//! label glyphs and never affect the outcome.

use super::ledger::GuessLedger;
use super::mapping::{CanonicalMapping, ExtraMapping, fold_letter};
use std::fmt;

/// Outcome of comparing guesses against the phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchResult {
    /// Not every phrase number has a guess yet
    #[default]
    Undetermined,
    /// Every phrase number carries its correct letter
    Win,
    /// Every phrase number has a guess and at least one is wrong
    Mismatch,
}

impl MatchResult {
    /// Whether the puzzle has reached a final verdict
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Mismatch)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undetermined => write!(f, "undetermined"),
            Self::Win => write!(f, "win"),
            Self::Mismatch => write!(f, "mismatch"),
        }
    }
}

/// Decide the puzzle outcome for the current guesses
///
/// # Algorithm
/// 1. Drop every ledger entry keyed by an extra number
/// 2. Nothing to compare (no phrase letters or no guesses): `Undetermined`
/// 3. Fewer guesses than phrase letters: `Undetermined`
/// 4. Every phrase letter must match the guess under its number, else `Mismatch`
///
/// # Examples
/// ```
/// use figgerits::core::{ExtraMapping, GuessLedger, MatchResult, assign, evaluate};
///
/// let canonical = assign("ABC");
/// let ledger: GuessLedger = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
/// assert_eq!(evaluate(&canonical, &ExtraMapping::new(), &ledger), MatchResult::Win);
/// ```
#[must_use]
pub fn evaluate(
    canonical: &CanonicalMapping,
    extra: &ExtraMapping,
    ledger: &GuessLedger,
) -> MatchResult {
    let extra_numbers = extra.inverse();
    let filtered = ledger.without(|number| extra_numbers.contains_key(&number));

    if canonical.is_empty() || filtered.is_empty() {
        return MatchResult::Undetermined;
    }

    if filtered.len() < canonical.len() {
        return MatchResult::Undetermined;
    }

    let expected = canonical.inverse();
    let all_match = expected.iter().all(|(&number, &letter)| {
        filtered
            .get(number)
            .is_some_and(|guess| fold_letter(guess) == letter)
    });

    if all_match {
        MatchResult::Win
    } else {
        MatchResult::Mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NumberAllocator, assign};

    fn ledger(entries: &[(u32, char)]) -> GuessLedger {
        entries.iter().copied().collect()
    }

    #[test]
    fn complete_and_correct_is_win() {
        let canonical = assign("ABC");
        let result = evaluate(
            &canonical,
            &ExtraMapping::new(),
            &ledger(&[(1, 'a'), (2, 'b'), (3, 'c')]),
        );
        assert_eq!(result, MatchResult::Win);
    }

    #[test]
    fn incomplete_is_undetermined() {
        let canonical = assign("ABC");
        let result = evaluate(
            &canonical,
            &ExtraMapping::new(),
            &ledger(&[(1, 'a'), (2, 'b')]),
        );
        assert_eq!(result, MatchResult::Undetermined);
    }

    #[test]
    fn wrong_letter_is_mismatch() {
        let canonical = assign("ABC");
        let result = evaluate(
            &canonical,
            &ExtraMapping::new(),
            &ledger(&[(1, 'a'), (2, 'z'), (3, 'c')]),
        );
        assert_eq!(result, MatchResult::Mismatch);
    }

    #[test]
    fn extra_numbers_are_ignored() {
        let canonical = assign("AB");
        let mut allocator = NumberAllocator::after(&canonical);
        assert_eq!(allocator.allocate('x'), 3);

        let result = evaluate(
            &canonical,
            allocator.extra(),
            &ledger(&[(1, 'a'), (2, 'b'), (3, 'q')]),
        );
        assert_eq!(result, MatchResult::Win);
    }

    #[test]
    fn extra_guesses_do_not_complete_the_phrase() {
        let canonical = assign("AB");
        let mut allocator = NumberAllocator::after(&canonical);
        allocator.allocate('x');

        let result = evaluate(&canonical, allocator.extra(), &ledger(&[(1, 'a'), (3, 'x')]));
        assert_eq!(result, MatchResult::Undetermined);
    }

    #[test]
    fn empty_inputs_are_undetermined() {
        let canonical = assign("ABC");
        assert_eq!(
            evaluate(&canonical, &ExtraMapping::new(), &GuessLedger::new()),
            MatchResult::Undetermined
        );
        assert_eq!(
            evaluate(&assign(""), &ExtraMapping::new(), &ledger(&[(1, 'a')])),
            MatchResult::Undetermined
        );
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let canonical = assign("Ab aB");
        let result = evaluate(&canonical, &ExtraMapping::new(), &ledger(&[(1, 'A'), (2, 'B')]));
        assert_eq!(result, MatchResult::Win);
    }

    #[test]
    fn evaluation_is_pure() {
        let canonical = assign("CAT");
        let guesses = ledger(&[(1, 'c'), (2, 'a'), (3, 'x')]);
        let first = evaluate(&canonical, &ExtraMapping::new(), &guesses);
        let second = evaluate(&canonical, &ExtraMapping::new(), &guesses);
        assert_eq!(first, second);
        assert_eq!(first, MatchResult::Mismatch);
    }

    #[test]
    fn terminal_results() {
        assert!(MatchResult::Win.is_terminal());
        assert!(MatchResult::Mismatch.is_terminal());
        assert!(!MatchResult::Undetermined.is_terminal());
    }
}

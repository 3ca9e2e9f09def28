//! Session lifecycle: loading, guessing, verdicts

use crate::core::{
    Board, CanonicalMapping, Clue, ExtraMapping, GuessError, GuessLedger, MatchResult,
    NumberAllocator, Phrase, PuzzleContent, assign, evaluate, is_letter, parse_guess,
};
use crate::provider::ContentFetchError;
use thiserror::Error;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for puzzle content; no guesses accepted
    Loading,
    /// A puzzle is on the board
    Ready,
}

/// Identifies one load request
///
/// Only the ticket of the most recent `begin_new_puzzle` call is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: u64,
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    /// The response belonged to an earlier request and was dropped
    Stale,
    /// The fetch failed; the session keeps waiting
    Failed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no puzzle is loaded yet")]
    Loading,
    #[error("the puzzle is already decided ({0})")]
    Finished(MatchResult),
    #[error("number {0} is not on the board")]
    UnknownNumber(u32),
    #[error(transparent)]
    Guess(#[from] GuessError),
}

/// State of a single puzzle
#[derive(Debug)]
pub struct PuzzleSession {
    generation: u64,
    phase: Phase,
    phrase: Phrase,
    clues: Vec<Clue>,
    canonical: CanonicalMapping,
    allocator: NumberAllocator,
    ledger: GuessLedger,
    board: Board,
    result: MatchResult,
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSession {
    /// Empty session waiting for its first puzzle
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: Phase::Loading,
            phrase: Phrase::default(),
            clues: Vec::new(),
            canonical: CanonicalMapping::new(),
            allocator: NumberAllocator::default(),
            ledger: GuessLedger::new(),
            board: Board::default(),
            result: MatchResult::Undetermined,
        }
    }

    /// Session with `content` already loaded
    #[must_use]
    pub fn with_content(content: PuzzleContent) -> Self {
        let mut session = Self::new();
        let ticket = session.begin_new_puzzle();
        session.complete_load(ticket, Ok(content));
        session
    }

    /// Drop the current puzzle and wait for a new one
    ///
    /// Phrase, clues, mappings, counter, ledger and board are all reset before
    /// this returns. Responses to earlier tickets are ignored from now on.
    pub fn begin_new_puzzle(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.phrase = Phrase::default();
        self.clues.clear();
        self.canonical = CanonicalMapping::new();
        self.allocator = NumberAllocator::default();
        self.ledger.clear();
        self.board = Board::default();
        self.result = MatchResult::Undetermined;

        log::info!("waiting for puzzle #{}", self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Install the answer to a load request
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PuzzleContent, ContentFetchError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation || self.phase != Phase::Loading {
            log::debug!(
                "dropping response for puzzle #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(content) => {
                self.install(content);
                LoadOutcome::Ready
            }
            Err(err) => {
                log::error!("failed to load puzzle #{}: {err}", ticket.generation);
                LoadOutcome::Failed
            }
        }
    }

    fn install(&mut self, content: PuzzleContent) {
        self.phrase = Phrase::new(content.phrase);
        self.clues = content.clues;
        self.canonical = assign(self.phrase.text());
        self.allocator = NumberAllocator::after(&self.canonical);
        self.board = Board::layout(
            &self.phrase,
            &self.clues,
            &self.canonical,
            &mut self.allocator,
        );
        self.ledger.clear();
        self.result = MatchResult::Undetermined;
        self.phase = Phase::Ready;

        log::info!(
            "puzzle #{} ready: {} letters, {} clues, {} extra numbers",
            self.generation,
            self.canonical.len(),
            self.clues.len(),
            self.allocator.extra().len()
        );
    }

    /// Number shown for `letter`, allocating an extra one if the phrase lacks it
    ///
    /// Returns `None` for non-letters and while no puzzle is loaded.
    pub fn number_for(&mut self, letter: char) -> Option<u32> {
        if self.phase != Phase::Ready || !is_letter(letter) {
            return None;
        }
        Some(
            self.canonical
                .get(letter)
                .unwrap_or_else(|| self.allocator.allocate(letter)),
        )
    }

    /// Whether guesses are currently accepted
    #[must_use]
    pub fn accepts_guesses(&self) -> bool {
        self.phase == Phase::Ready && !self.result.is_terminal()
    }

    fn check_writable(&self, number: u32) -> Result<(), SessionError> {
        if self.phase == Phase::Loading {
            return Err(SessionError::Loading);
        }
        if self.result.is_terminal() {
            return Err(SessionError::Finished(self.result));
        }
        if !self.canonical.contains_number(number) && !self.allocator.extra().contains_number(number)
        {
            return Err(SessionError::UnknownNumber(number));
        }
        Ok(())
    }

    /// Write the guess for `number` and re-evaluate
    ///
    /// `None` clears the guess. Every glyph showing `number` sees the new value.
    ///
    /// # Errors
    /// Returns `SessionError` if no puzzle is ready, the puzzle is decided, the
    /// number is not on the board, or the guess is not a letter. The ledger is
    /// unchanged on error.
    pub fn set_guess(
        &mut self,
        number: u32,
        guess: Option<char>,
    ) -> Result<MatchResult, SessionError> {
        self.check_writable(number)?;
        self.ledger.set(number, guess)?;
        Ok(self.evaluate())
    }

    /// Parse raw player input and write it as the guess for `number`
    ///
    /// # Errors
    /// See [`set_guess`](Self::set_guess); unparsable input is a `SessionError::Guess`.
    pub fn input_guess(&mut self, number: u32, input: &str) -> Result<MatchResult, SessionError> {
        self.check_writable(number)?;
        let guess = parse_guess(input)?;
        self.set_guess(number, guess)
    }

    /// Clear the guess for `number`
    ///
    /// # Errors
    /// See [`set_guess`](Self::set_guess).
    pub fn clear_guess(&mut self, number: u32) -> Result<MatchResult, SessionError> {
        self.set_guess(number, None)
    }

    #[must_use]
    pub fn get_guess(&self, number: u32) -> Option<char> {
        self.ledger.get(number)
    }

    /// Recompute the match result from the current guesses
    pub fn evaluate(&mut self) -> MatchResult {
        let result = evaluate(&self.canonical, self.allocator.extra(), &self.ledger);
        if result != self.result && result.is_terminal() {
            log::info!("puzzle #{} decided: {result}", self.generation);
        }
        self.result = result;
        result
    }

    /// Clear every guess and keep the same puzzle
    ///
    /// # Errors
    /// Returns `SessionError::Loading` when no puzzle is on the board.
    pub fn reset_after_mismatch(&mut self) -> Result<MatchResult, SessionError> {
        if self.phase == Phase::Loading {
            return Err(SessionError::Loading);
        }
        self.ledger.clear();
        Ok(self.evaluate())
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    #[must_use]
    pub const fn result(&self) -> MatchResult {
        self.result
    }

    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    #[must_use]
    pub const fn canonical(&self) -> &CanonicalMapping {
        &self.canonical
    }

    #[must_use]
    pub const fn extra(&self) -> &ExtraMapping {
        self.allocator.extra()
    }

    #[must_use]
    pub const fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Phrase numbers that still have no guess, in increasing order
    #[must_use]
    pub fn unguessed(&self) -> Vec<u32> {
        self.canonical
            .iter()
            .map(|(_, number)| number)
            .filter(|&number| self.ledger.get(number).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(phrase: &str, answers: &[&str]) -> PuzzleContent {
        PuzzleContent {
            phrase: phrase.to_string(),
            clues: answers
                .iter()
                .enumerate()
                .map(|(i, answer)| Clue::new(format!("riddle {i}"), *answer, i as i64))
                .collect(),
        }
    }

    fn solve(session: &mut PuzzleSession) -> MatchResult {
        let pairs: Vec<(char, u32)> = session.canonical().iter().collect();
        let mut result = MatchResult::Undetermined;
        for (letter, number) in pairs {
            result = session.set_guess(number, Some(letter)).unwrap();
        }
        result
    }

    #[test]
    fn new_session_is_loading() {
        let mut session = PuzzleSession::new();
        assert_eq!(session.phase(), Phase::Loading);
        assert!(!session.accepts_guesses());
        assert_eq!(session.set_guess(1, Some('a')), Err(SessionError::Loading));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn load_assigns_canonical_and_extra_numbers() {
        let session = PuzzleSession::with_content(content("CAT", &["TAXY"]));

        assert!(session.is_ready());
        assert_eq!(session.canonical().to_string(), "{c:1, a:2, t:3}");
        assert_eq!(session.extra().to_string(), "{x:4, y:5}");
        assert_eq!(session.result(), MatchResult::Undetermined);
    }

    #[test]
    fn number_for_is_idempotent() {
        let mut session = PuzzleSession::with_content(content("CAT", &[]));

        assert_eq!(session.number_for('C'), Some(1));
        assert_eq!(session.number_for('x'), Some(4));
        assert_eq!(session.number_for('y'), Some(5));
        assert_eq!(session.number_for('X'), Some(4));
        assert_eq!(session.number_for(' '), None);
        assert_eq!(session.extra().len(), 2);
    }

    #[test]
    fn number_for_while_loading_allocates_nothing() {
        let mut session = PuzzleSession::with_content(content("CAT", &[]));
        session.begin_new_puzzle();

        assert_eq!(session.number_for('a'), None);
        assert_eq!(session.number_for('x'), None);
        assert!(session.extra().is_empty());
    }

    #[test]
    fn correct_guesses_win() {
        let mut session = PuzzleSession::with_content(content("BAD DAB", &["ABBA"]));
        assert_eq!(solve(&mut session), MatchResult::Win);
        assert!(!session.accepts_guesses());
        assert_eq!(
            session.set_guess(1, Some('z')),
            Err(SessionError::Finished(MatchResult::Win))
        );
    }

    #[test]
    fn wrong_guess_is_mismatch_then_retry() {
        let mut session = PuzzleSession::with_content(content("ABC", &[]));

        session.set_guess(1, Some('a')).unwrap();
        assert_eq!(session.set_guess(2, Some('b')), Ok(MatchResult::Undetermined));
        assert_eq!(session.set_guess(3, Some('z')), Ok(MatchResult::Mismatch));
        assert_eq!(
            session.set_guess(3, Some('c')),
            Err(SessionError::Finished(MatchResult::Mismatch))
        );

        assert_eq!(session.reset_after_mismatch(), Ok(MatchResult::Undetermined));
        assert!(session.ledger().is_empty());
        assert_eq!(session.phrase().text(), "ABC");
        assert_eq!(solve(&mut session), MatchResult::Win);
    }

    #[test]
    fn extra_guesses_do_not_matter() {
        let mut session = PuzzleSession::with_content(content("AB", &["XBA"]));
        assert_eq!(session.extra().get('x'), Some(3));

        session.set_guess(3, Some('q')).unwrap();
        session.set_guess(1, Some('a')).unwrap();
        assert_eq!(session.set_guess(2, Some('b')), Ok(MatchResult::Win));
    }

    #[test]
    fn glyphs_share_a_guess() {
        let mut session = PuzzleSession::with_content(content("BAD DAB", &[]));
        session.set_guess(1, Some('b')).unwrap();

        for pos in session.board().glyphs_with(1) {
            let number = session.board().glyph(pos).and_then(|g| g.number()).unwrap();
            assert_eq!(session.get_guess(number), Some('b'));
        }
    }

    #[test]
    fn invalid_input_leaves_ledger_unchanged() {
        let mut session = PuzzleSession::with_content(content("ABC", &[]));
        session.set_guess(1, Some('a')).unwrap();

        assert!(matches!(
            session.input_guess(1, "7"),
            Err(SessionError::Guess(GuessError::NotALetter('7')))
        ));
        assert!(matches!(
            session.input_guess(1, "ab"),
            Err(SessionError::Guess(GuessError::NotSingleCharacter(_)))
        ));
        assert_eq!(session.get_guess(1), Some('a'));
    }

    #[test]
    fn input_guess_clears_on_empty() {
        let mut session = PuzzleSession::with_content(content("ABC", &[]));
        session.input_guess(2, "B").unwrap();
        assert_eq!(session.get_guess(2), Some('b'));
        session.input_guess(2, "").unwrap();
        assert_eq!(session.get_guess(2), None);
        assert_eq!(session.unguessed(), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_number_is_rejected() {
        let mut session = PuzzleSession::with_content(content("ABC", &[]));
        assert_eq!(
            session.set_guess(42, Some('a')),
            Err(SessionError::UnknownNumber(42))
        );
    }

    #[test]
    fn new_puzzle_resets_everything() {
        let mut session = PuzzleSession::with_content(content("XYZ", &["QQ"]));
        assert_eq!(solve(&mut session), MatchResult::Win);

        let ticket = session.begin_new_puzzle();
        assert_eq!(session.phase(), Phase::Loading);
        assert!(session.canonical().is_empty());
        assert!(session.extra().is_empty());
        assert!(session.ledger().is_empty());
        assert!(session.board().is_empty());
        assert_eq!(session.result(), MatchResult::Undetermined);

        assert_eq!(
            session.complete_load(ticket, Ok(content("XYZ", &["QQ"]))),
            LoadOutcome::Ready
        );
        assert_eq!(session.canonical().get('x'), Some(1));
        assert_eq!(session.extra().get('q'), Some(4));
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut session = PuzzleSession::new();
        let old = session.begin_new_puzzle();
        let current = session.begin_new_puzzle();

        assert_eq!(
            session.complete_load(old, Ok(content("OLD", &[]))),
            LoadOutcome::Stale
        );
        assert_eq!(session.phase(), Phase::Loading);

        assert_eq!(
            session.complete_load(current, Ok(content("NEW", &[]))),
            LoadOutcome::Ready
        );
        assert_eq!(session.phrase().text(), "NEW");

        assert_eq!(
            session.complete_load(current, Ok(content("AGAIN", &[]))),
            LoadOutcome::Stale
        );
        assert_eq!(session.phrase().text(), "NEW");
    }

    #[test]
    fn failed_load_stays_loading() {
        let mut session = PuzzleSession::new();
        let ticket = session.begin_new_puzzle();

        let outcome = session.complete_load(ticket, Err(ContentFetchError::Empty("test".to_string())));

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.set_guess(1, Some('a')), Err(SessionError::Loading));
        assert_eq!(session.reset_after_mismatch(), Err(SessionError::Loading));
    }
}

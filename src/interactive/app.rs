//! TUI application state and logic

use crate::core::{GlyphPos, MatchResult, is_letter};
use crate::provider::PuzzleLoader;
use crate::session::{LoadOutcome, PuzzleSession, SessionError, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: PuzzleSession,
    pub loader: PuzzleLoader,
    /// Letter glyphs in reading order, rebuilt for every puzzle
    pub positions: Vec<GlyphPos>,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub ticks: usize,
}

/// What the keyboard currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Loading,
    Playing,
    WinCelebration,
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(loader: PuzzleLoader) -> Self {
        Self {
            session: PuzzleSession::new(),
            loader,
            positions: Vec::new(),
            cursor: 0,
            messages: vec![Message {
                text: "Welcome! Solve the riddles to decode the phrase.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if !self.session.is_ready() {
            return InputMode::Loading;
        }
        match self.session.result() {
            MatchResult::Undetermined => InputMode::Playing,
            MatchResult::Win => InputMode::WinCelebration,
            MatchResult::Mismatch => InputMode::Mismatch,
        }
    }

    /// Drop the current puzzle and ask the loader for another
    pub fn new_puzzle(&mut self) {
        let ticket = self.session.begin_new_puzzle();
        self.positions.clear();
        self.cursor = 0;
        self.loader.request(ticket);
    }

    /// Hand finished fetches to the session
    pub fn poll_loader(&mut self) {
        while let Some(response) = self.loader.try_next() {
            if self.session.complete_load(response.ticket, response.result) == LoadOutcome::Ready
            {
                self.positions = self.session.board().letter_positions();
                self.cursor = 0;
                self.stats.record_start();
                self.add_message(
                    &format!(
                        "New puzzle: {} letters to decode, {} riddles.",
                        self.session.canonical().len(),
                        self.session.clues().len()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Position under the cursor
    #[must_use]
    pub fn current_pos(&self) -> Option<GlyphPos> {
        self.positions.get(self.cursor).copied()
    }

    /// Number of the glyph under the cursor; every glyph with it is highlighted
    #[must_use]
    pub fn selected_number(&self) -> Option<u32> {
        self.current_pos()
            .and_then(|pos| self.session.board().glyph(pos))
            .and_then(|glyph| glyph.number())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.positions.is_empty() {
            return;
        }
        let last = self.positions.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Jump to the first glyph of the next (`forward`) or previous section
    ///
    /// The phrase is one section; each clue answer is another.
    pub fn jump_section(&mut self, forward: bool) {
        let Some(current) = self.current_pos().map(section_of) else {
            return;
        };
        let target = if forward {
            self.positions
                .iter()
                .position(|&pos| section_of(pos) > current)
        } else {
            current.checked_sub(1).and_then(|previous| {
                self.positions
                    .iter()
                    .position(|&pos| section_of(pos) == previous)
            })
        };
        if let Some(index) = target {
            self.cursor = index;
        }
    }

    /// Move to the next glyph whose number has no guess, wrapping around
    pub fn next_unguessed(&mut self) {
        let len = self.positions.len();
        for step in 1..=len {
            let index = (self.cursor + step) % len;
            let unguessed = self
                .session
                .board()
                .glyph(self.positions[index])
                .and_then(|glyph| glyph.number())
                .is_some_and(|number| self.session.get_guess(number).is_none());
            if unguessed {
                self.cursor = index;
                return;
            }
        }
    }

    /// Write a guess for the selected number
    ///
    /// Non-letters are dropped without a word, like a text field that refuses them.
    pub fn type_letter(&mut self, c: char) {
        if !is_letter(c) || !self.session.accepts_guesses() {
            return;
        }
        let Some(number) = self.selected_number() else {
            return;
        };

        match self.session.set_guess(number, Some(c)) {
            Ok(result) => {
                self.on_result(result);
                if result == MatchResult::Undetermined {
                    self.next_unguessed();
                }
            }
            Err(SessionError::Guess(_)) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn clear_selected(&mut self) {
        if !self.session.accepts_guesses() {
            return;
        }
        let Some(number) = self.selected_number() else {
            return;
        };
        if let Err(err) = self.session.clear_guess(number) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Clear every guess after a mismatch
    pub fn retry(&mut self) {
        match self.session.reset_after_mismatch() {
            Ok(_) => {
                self.cursor = 0;
                self.add_message("Guesses cleared. Try again!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn on_result(&mut self, result: MatchResult) {
        self.stats.record_result(result);
        match result {
            MatchResult::Win => {
                self.add_message("🎉 You decoded the phrase! 🎉", MessageStyle::Success);
            }
            MatchResult::Mismatch => {
                self.add_message("Some letters are wrong.", MessageStyle::Error);
            }
            MatchResult::Undetermined => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode() {
            InputMode::Loading => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_puzzle(),
                _ => {}
            },
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_puzzle(),
                _ => {}
            },
            InputMode::Mismatch => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') | KeyCode::Enter => self.retry(),
                KeyCode::Char('n') => self.new_puzzle(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_puzzle();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.type_letter(c);
                }
                KeyCode::Backspace | KeyCode::Delete => self.clear_selected(),
                KeyCode::Left => self.move_cursor(-1),
                KeyCode::Right => self.move_cursor(1),
                KeyCode::Down => self.jump_section(true),
                KeyCode::Up => self.jump_section(false),
                KeyCode::Tab => self.next_unguessed(),
                _ => {}
            },
        }
    }
}

fn section_of(pos: GlyphPos) -> usize {
    match pos {
        GlyphPos::Phrase(..) => 0,
        GlyphPos::Clue(clue, _) => clue + 1,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_puzzle();

    loop {
        app.poll_loader();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.ticks = app.ticks.wrapping_add(1);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clue, PuzzleContent};
    use crate::provider::{ContentFetchError, PuzzleProvider};
    use std::sync::Arc;

    struct Fixed;

    impl PuzzleProvider for Fixed {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn fetch(&self) -> Result<PuzzleContent, ContentFetchError> {
            Ok(PuzzleContent {
                phrase: "BAD DAB".to_string(),
                clues: vec![Clue::new("Opposite of good", "BAD", 1), Clue::new("x", "AXE", 2)],
            })
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(PuzzleLoader::new(Arc::new(Fixed)));
        app.new_puzzle();
        let response = app.loader.wait(Duration::from_secs(5)).unwrap();
        app.session.complete_load(response.ticket, response.result);
        app.positions = app.session.board().letter_positions();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_loading() {
        let app = App::new(PuzzleLoader::new(Arc::new(Fixed)));
        assert_eq!(app.input_mode(), InputMode::Loading);
        assert_eq!(app.selected_number(), None);
    }

    #[test]
    fn typing_fills_every_glyph_with_the_number() {
        let mut app = loaded_app();
        assert_eq!(app.input_mode(), InputMode::Playing);
        assert_eq!(app.selected_number(), Some(1));

        press(&mut app, KeyCode::Char('B'));

        assert_eq!(app.session.get_guess(1), Some('b'));
        // cursor skips to the next glyph without a guess
        assert_eq!(app.selected_number(), Some(2));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('5'));
        assert!(app.session.ledger().is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn control_chords_do_not_guess() {
        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));

        assert!(app.session.ledger().is_empty());
        assert_eq!(app.input_mode(), InputMode::Playing);
    }

    #[test]
    fn typing_after_win_is_ignored_quietly() {
        let mut app = loaded_app();
        for c in ['b', 'a', 'd'] {
            press(&mut app, KeyCode::Char(c));
        }
        let messages = app.messages.len();

        app.type_letter('z');
        app.clear_selected();

        assert_eq!(app.session.get_guess(1), Some('b'));
        assert_eq!(app.messages.len(), messages);
    }

    #[test]
    fn solving_switches_to_celebration() {
        let mut app = loaded_app();
        for c in ['b', 'a', 'd'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode(), InputMode::WinCelebration);
        assert_eq!(app.stats.puzzles_won, 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Loading);
    }

    #[test]
    fn mismatch_then_retry() {
        let mut app = loaded_app();
        for c in ['b', 'a', 'z'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode(), InputMode::Mismatch);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.input_mode(), InputMode::Playing);
        assert!(app.session.ledger().is_empty());
    }

    #[test]
    fn backspace_clears_selected() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_number(), Some(1));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.get_guess(1), None);
    }

    #[test]
    fn sections_and_bounds() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.current_pos(), Some(GlyphPos::Clue(0, 0)));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.current_pos(), Some(GlyphPos::Clue(1, 0)));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.current_pos(), Some(GlyphPos::Clue(1, 0)));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.current_pos(), Some(GlyphPos::Clue(0, 0)));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.current_pos(), Some(GlyphPos::Phrase(0, 0)));

        for _ in 0..100 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, app.positions.len() - 1);
    }

    #[test]
    fn extra_numbers_can_be_guessed() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        // 'x' only appears in a clue
        assert_eq!(app.selected_number(), Some(4));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session.get_guess(4), Some('x'));
        assert_eq!(app.input_mode(), InputMode::Playing);
    }
}

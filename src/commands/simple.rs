//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the player types `<number> <letter>` pairs.

use crate::core::MatchResult;
use crate::output::{print_clues, print_phrase, print_result};
use crate::provider::PuzzleLoader;
use crate::session::{LoadOutcome, PuzzleSession, SessionError, Statistics};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// How long the line mode waits for a fetch before giving up
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewPuzzle,
    Retry,
    Show,
    Help,
    /// Write (or clear, when `input` is empty) the guess for a number
    Guess { number: u32, input: String },
    Unknown(String),
}

impl Command {
    /// Parse a line such as `7 e`, `7=e`, `7 -` or `new`
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().replace('=', " ");
        let mut parts = normalized.split_whitespace();

        let Some(head) = parts.next() else {
            return Self::Show;
        };

        if let Ok(number) = head.parse::<u32>() {
            let rest: Vec<&str> = parts.collect();
            let input = match rest.as_slice() {
                [] | ["-"] => String::new(),
                _ => rest.join(" "),
            };
            return Self::Guess { number, input };
        }

        match head.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewPuzzle,
            "retry" | "r" | "reset" => Self::Retry,
            "show" | "s" | "board" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading player input fails or the loader shuts down.
pub fn run_simple(loader: &PuzzleLoader) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Figgerits - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Every letter of the hidden phrase is replaced by a number.");
    println!("Solve the riddles below it to find out which letter is which.\n");
    print_help();

    let mut session = PuzzleSession::new();
    let mut stats = Statistics::default();
    let mut loaded = load_puzzle(&mut session, loader, &mut stats);

    if loaded {
        show_board(&session);
    }

    loop {
        let line = get_user_input(if loaded { "Guess" } else { "Command" })?;

        match Command::parse(&line) {
            Command::Quit => break,
            Command::NewPuzzle => {
                loaded = load_puzzle(&mut session, loader, &mut stats);
                if loaded {
                    show_board(&session);
                }
            }
            Command::Help => print_help(),
            Command::Show if loaded => show_board(&session),
            Command::Retry if loaded => match session.reset_after_mismatch() {
                Ok(_) => {
                    println!("🔄 Guesses cleared.");
                    print_phrase(&session);
                }
                Err(err) => println!("{}", err.to_string().red()),
            },
            Command::Guess { number, input } if loaded => {
                match session.input_guess(number, &input) {
                    Ok(result) => {
                        print_phrase(&session);
                        print_result(result);
                        stats.record_result(result);

                        if result == MatchResult::Win {
                            print_stats(&stats);
                            match get_user_input("Play again? (yes/no)")?
                                .to_lowercase()
                                .as_str()
                            {
                                "yes" | "y" => {
                                    loaded = load_puzzle(&mut session, loader, &mut stats);
                                    if loaded {
                                        show_board(&session);
                                    }
                                }
                                _ => break,
                            }
                        }
                    }
                    Err(SessionError::Guess(err)) => {
                        println!("{}", format!("Ignored: {err}").yellow());
                    }
                    Err(err) => println!("{}", err.to_string().red()),
                }
            }
            Command::Unknown(text) => {
                println!("Unknown command '{text}'. Type 'help' for the list.");
            }
            Command::Show | Command::Retry | Command::Guess { .. } => {
                println!("No puzzle is loaded. Type 'new' to try again or 'quit' to leave.");
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Request a puzzle and wait for it behind a spinner
///
/// Returns whether a puzzle is now on the board.
fn load_puzzle(
    session: &mut PuzzleSession,
    loader: &PuzzleLoader,
    stats: &mut Statistics,
) -> bool {
    let ticket = session.begin_new_puzzle();
    loader.request(ticket);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Generating content...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = loop {
        let Some(response) = loader.wait(FETCH_TIMEOUT) else {
            log::warn!("no puzzle after {}s", FETCH_TIMEOUT.as_secs());
            break LoadOutcome::Failed;
        };
        match session.complete_load(response.ticket, response.result) {
            LoadOutcome::Stale => {}
            outcome => break outcome,
        }
    };
    spinner.finish_and_clear();

    if outcome == LoadOutcome::Ready {
        stats.record_start();
        true
    } else {
        println!(
            "{}",
            "Could not load a puzzle. Type 'new' to try again or 'quit' to leave.".red()
        );
        false
    }
}

fn show_board(session: &PuzzleSession) {
    print_phrase(session);
    print_clues(session);
}

fn print_help() {
    println!("Commands:");
    println!("  <number> <letter>   guess a letter, e.g. '7 e' or '7=e'");
    println!("  <number> -          clear a guess");
    println!("  show                print the board again");
    println!("  retry               clear every guess");
    println!("  new                 start a new puzzle");
    println!("  quit                leave\n");
}

fn print_stats(stats: &Statistics) {
    println!(
        "\n  Puzzles: {} | Won: {} | Win rate: {:.0}%\n",
        stats.puzzles_started.to_string().bright_cyan(),
        stats.puzzles_won.to_string().bright_green(),
        stats.win_rate()
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(number: u32, input: &str) -> Command {
        Command::Guess {
            number,
            input: input.to_string(),
        }
    }

    #[test]
    fn parse_guesses() {
        assert_eq!(Command::parse("7 e"), guess(7, "e"));
        assert_eq!(Command::parse("7=E"), guess(7, "E"));
        assert_eq!(Command::parse("  12   q "), guess(12, "q"));
        assert_eq!(Command::parse("7 -"), guess(7, ""));
        assert_eq!(Command::parse("7"), guess(7, ""));
        assert_eq!(Command::parse("7 ab"), guess(7, "ab"));
    }

    #[test]
    fn parse_words() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("new"), Command::NewPuzzle);
        assert_eq!(Command::parse("retry"), Command::Retry);
        assert_eq!(Command::parse(""), Command::Show);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(
            Command::parse("dance"),
            Command::Unknown("dance".to_string())
        );
    }
}

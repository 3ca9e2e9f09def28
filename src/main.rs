//! Figgerits - CLI
//!
//! Cryptogram puzzle game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figgerits::{
    commands::{run_simple, show_puzzle},
    provider::{CatalogProvider, FileProvider, PuzzleLoader, PuzzleProvider},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "figgerits",
    about = "Decode a numbered phrase with the help of riddles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle source: 'catalog' (default, built-in puzzles) or path to a JSON file
    #[arg(short, long, global = true, default_value = "catalog")]
    source: String,

    /// Seed for picking puzzles, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Print one puzzle encoded as numbers
    Show {
        /// Also print the phrase and its letter mapping
        #[arg(short, long)]
        reveal: bool,
    },
}

/// Build the puzzle provider selected by the -s flag
///
/// - "catalog": puzzles compiled into the binary
/// - "<path>": JSON file holding one puzzle or an array of puzzles
fn load_provider(source: &str, seed: Option<u64>) -> Result<Arc<dyn PuzzleProvider>> {
    match source {
        "catalog" => {
            let catalog =
                CatalogProvider::embedded(seed).context("built-in puzzle catalog is unusable")?;
            Ok(Arc::new(catalog))
        }
        path => Ok(Arc::new(FileProvider::new(path, seed))),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let provider = load_provider(&cli.source, cli.seed)?;
    log::debug!("puzzle source: {}", provider.describe());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(provider),
        Commands::Simple => run_simple(&PuzzleLoader::new(provider)),
        Commands::Show { reveal } => {
            show_puzzle(provider.as_ref(), reveal).context("could not load a puzzle")
        }
    }
}

fn run_play_command(provider: Arc<dyn PuzzleProvider>) -> Result<()> {
    use figgerits::interactive::{App, run_tui};

    let app = App::new(PuzzleLoader::new(provider));
    run_tui(app)
}

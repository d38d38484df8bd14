//! Blank & Spy - shared-device party game binary
//!
//! Runs the reveal sequence in the terminal: the device is passed around the
//! table and each player reveals their word in turn. The host can expose any
//! seat's role out of turn for the elimination step.

use blank_spy::{
    core::GameConfig,
    game::GameHost,
    loader::{CatalogLoader, WordCatalog},
    GameError, Result,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blankspy")]
#[command(about = "Blank & Spy - social deduction word game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a game at the table (interactive, pass-the-device)
    Play {
        /// Number of players (prompted interactively if omitted)
        #[arg(long)]
        players: Option<usize>,

        /// Number of Innocent Civilians (no word)
        #[arg(long)]
        blanks: Option<usize>,

        /// Number of Spies (odd word)
        #[arg(long)]
        spies: Option<usize>,

        /// Word-pair catalog file (.tsv); defaults to the built-in list
        #[arg(long, value_name = "CATALOG_FILE")]
        catalog: Option<PathBuf>,

        /// Set random seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Inspect the word-pair catalog
    Catalog {
        /// Catalog file to inspect; defaults to the built-in list
        #[arg(long, value_name = "CATALOG_FILE")]
        file: Option<PathBuf>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            players,
            blanks,
            spies,
            catalog,
            seed,
        } => run_play(players, blanks, spies, catalog, seed),
        Commands::Catalog { file, json } => run_catalog(file, json),
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<WordCatalog> {
    match path {
        Some(path) => CatalogLoader::load_from_file(path),
        None => Ok(WordCatalog::builtin()),
    }
}

fn run_catalog(file: Option<PathBuf>, json: bool) -> Result<()> {
    let catalog = load_catalog(file.as_ref())?;
    if json {
        let out = serde_json::to_string_pretty(catalog.pairs())
            .map_err(|e| GameError::SerializationError(e.to_string()))?;
        println!("{}", out);
    } else {
        println!("{} word pairs", catalog.len());
        for pair in catalog.pairs() {
            println!("  {}  /  {}", pair.common, pair.odd);
        }
    }
    Ok(())
}

fn run_play(
    players: Option<usize>,
    blanks: Option<usize>,
    spies: Option<usize>,
    catalog_path: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_ref())?;

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha12Rng::seed_from_u64(seed);

    println!("=== Blank & Spy ===");
    println!("(seed: {})", seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut host = GameHost::new();

    // First deal can come from flags; restarts always go back to the prompt.
    let mut flag_config = match (players, blanks, spies) {
        (Some(p), Some(b), Some(s)) => Some(GameConfig::new(p, b, s)?),
        _ => None,
    };

    loop {
        if !host.has_session() {
            let config = match flag_config.take() {
                Some(config) => config,
                None => prompt_config(&mut lines)?,
            };
            host.start_game(&config, &catalog, &mut rng)?;
            println!(
                "Game on: {} players, {} Innocent Civilians, {} Spies.",
                config.total_players, config.num_blanks, config.num_spies
            );
        }
        let session = match host.session() {
            Some(session) => session,
            None => break,
        };

        println!();
        println!(
            "Player {} of {}",
            session.current_turn() + 1,
            session.player_count()
        );
        if session.revealed() {
            let word = session.current_role().word().unwrap_or("(no word)");
            println!("  >> {}", word);
        }

        print!("[r]eveal  [n]ext  [k]ill <seat>  [R]estart  [q]uit > ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let mut parts = line.trim().split_whitespace();

        match parts.next() {
            Some("r") | Some("reveal") => host.reveal()?,
            Some("n") | Some("next") => host.advance()?,
            Some("k") | Some("kill") => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(seat) if seat >= 1 => match host.inspect(seat - 1) {
                    Ok(role) => println!("Player {} role: {}", seat, role),
                    Err(e) => println!("{}", e),
                },
                _ => println!("usage: kill <seat number, starting at 1>"),
            },
            Some("R") | Some("restart") => host.restart(),
            Some("q") | Some("quit") => break,
            Some(other) => println!("unknown command: {}", other),
            None => {}
        }
    }

    Ok(())
}

/// Setup prompt: read the three counts, retrying until they validate
fn prompt_config(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<GameConfig> {
    loop {
        print!("players / innocent-civilians / spies (e.g. '5 1 1') > ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(GameError::IoError(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed during setup",
                )))
            }
        };

        let nums: Vec<usize> = line
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();
        if nums.len() != 3 {
            println!("enter three numbers");
            continue;
        }

        match GameConfig::new(nums[0], nums[1], nums[2]) {
            Ok(config) => return Ok(config),
            Err(e) => println!("{}", e),
        }
    }
}

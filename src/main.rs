use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_opponent::{
    board::{Board, Piece},
    config::AppConfig,
    search::Searcher,
    service::{MoveService, WinRecorder, Winner},
    tally::WinTally,
    terminal::{terminal_state, TerminalState},
    WIDTH,
};

mod display;

/// Play Connect 4 against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the search depth in plies
    #[arg(long, global = true)]
    depth: Option<usize>,

    /// Seed the tie-breaking random number generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Search root moves in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Override the win tally file
    #[arg(long, global = true)]
    tally: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), RUST_LOG takes priority
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the AI's reply to a 42 character board and print it as JSON
    Move {
        /// Rows from top to bottom, 0 = empty, 1 = player, 2 = AI
        board: String,
    },
    /// Play a game in the terminal
    Play {
        /// Two human players instead of one against the AI
        #[arg(long)]
        two_player: bool,
    },
    /// Show the number of games won by each side
    Stats,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // keep stdout free for game output and JSON replies
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.parallel {
        config.search.parallel = true;
    }
    if let Some(tally) = cli.tally {
        config.tally_path = tally;
    }
    config.validate()?;
    info!(?config, "configuration loaded");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Command::Move { board } => {
            let tally = WinTally::open(&config.tally_path)?;
            let mut service = MoveService::new(Searcher::new(config.search, rng), tally);
            let outcome = service.compute_move(&board)?;
            println!("{}", serde_json::to_string(&outcome)?);
        }
        Command::Play { two_player: true } => play_two_player()?,
        Command::Play { two_player: false } => {
            let tally = WinTally::open(&config.tally_path)?;
            let service = MoveService::new(Searcher::new(config.search, rng), tally);
            play_one_player(service)?;
        }
        Command::Stats => {
            let tally = WinTally::open(&config.tally_path)?;
            println!("Player wins: {}", tally.count(Winner::Player));
            println!("AI wins: {}", tally.count(Winner::Ai));
            println!("No winner: {}", tally.count(Winner::None));
        }
    }
    Ok(())
}

/// Prompts until a playable column is entered, returns it zero-indexed
fn read_column(board: &Board, prompt: &str) -> Result<usize> {
    loop {
        print!("{} > ", prompt);
        stdout().flush()?;
        let mut input_str = String::new();
        if stdin().read_line(&mut input_str)? == 0 {
            bail!("input closed before the game finished");
        }

        match input_str.trim().parse::<usize>() {
            Ok(column @ 1..=WIDTH) if board.is_valid_column(column - 1) => return Ok(column - 1),
            Ok(column @ 1..=WIDTH) => println!("Invalid move, column {} full", column),
            _ => println!(
                "Invalid move '{}', columns must be between 1 and {}",
                input_str.trim(),
                WIDTH
            ),
        }
    }
}

/// Plays against the AI, sending the board to the move service after every
/// human move the same way a remote client would
fn play_one_player<W: WinRecorder>(mut service: MoveService<StdRng, W>) -> Result<()> {
    let mut board = Board::new();

    println!("Welcome to Connect 4\n");
    loop {
        display::draw(&board)?;
        let column = read_column(&board, "Move input")?;
        board.play(column, Piece::Player);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
        spinner.set_message("AI is thinking...");
        spinner.enable_steady_tick(100);
        let outcome = service.compute_move(&board.encode());
        spinner.finish_and_clear();
        let outcome = outcome?;

        if outcome.move_valid {
            board.play(outcome.move_col, Piece::Ai);
            println!("AI plays column {}", outcome.move_col + 1);
        }

        if outcome.is_finished {
            display::draw(&board)?;
            match outcome.winner {
                Winner::Player => println!("You win!"),
                Winner::Ai => println!("AI wins!"),
                Winner::None => println!("Draw!"),
            }
            return Ok(());
        }
    }
}

/// Two humans sharing the terminal, nothing is recorded
fn play_two_player() -> Result<()> {
    let mut board = Board::new();
    let mut piece = Piece::Player;

    println!("Welcome to Connect 4\n");
    loop {
        display::draw(&board)?;
        let prompt = match piece {
            Piece::Player => "Player 1 move",
            _ => "Player 2 move",
        };
        let column = read_column(&board, prompt)?;
        board.play(column, piece);
        piece = piece.opponent();

        let state = terminal_state(&board);
        if !state.is_finished() {
            continue;
        }
        display::draw(&board)?;
        match state {
            TerminalState::PlayerWin => println!("Player 1 wins!"),
            TerminalState::AiWin => println!("Player 2 wins!"),
            _ => println!("Draw!"),
        }
        return Ok(());
    }
}

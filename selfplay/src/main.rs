//! Selfplay - demo harness pitting the search engine against itself.
//!
//! The outer game loop owns the current game state: it asks the engine for
//! a move with `choose_move`, applies it, prints the board, and repeats
//! until the game is over. No search state survives between moves; every
//! decision builds a fresh tree.

use std::fmt::Display;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use game_core::GameState;
use mcts::{choose_move, SearchBudget, SearchConfig, UniformRandom};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameChoice {
    Tictactoe,
    Connect4,
}

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play a full game, engine vs engine")]
struct Config {
    /// Game to play
    #[arg(long, value_enum, default_value = "connect4")]
    game: GameChoice,

    /// Search iterations per move (mutually exclusive with --time-ms)
    #[arg(long)]
    iterations: Option<u64>,

    /// Wall-clock search budget per move, in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// UCT exploration constant
    #[arg(long, default_value_t = 1.4)]
    exploration: f64,

    /// Master seed for rollout randomness; unseeded when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Winning line length (Connect Four variants only)
    #[arg(long, default_value_t = 4)]
    win_length: u8,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Config {
    fn validate(&self) -> Result<()> {
        if self.iterations.is_some() && self.time_ms.is_some() {
            bail!("--iterations and --time-ms are mutually exclusive");
        }
        if self.win_length == 0 {
            bail!("--win-length must be at least 1");
        }
        Ok(())
    }

    fn budget(&self) -> SearchBudget {
        match (self.iterations, self.time_ms) {
            (Some(count), None) => SearchBudget::iterations(count),
            (None, Some(ms)) => SearchBudget::time_limit(Duration::from_millis(ms)),
            // The classic demo pace: one second of search per move.
            _ => SearchBudget::time_limit(Duration::from_secs(1)),
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

/// Play one full game, alternating `choose_move` calls until terminal.
fn play<S>(mut state: S, config: &Config) -> Result<()>
where
    S: GameState + Display,
{
    let mut master = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let budget = config.budget();
    let search_config =
        SearchConfig::default().with_exploration_constant(config.exploration);

    let mut ply = 0u32;
    println!("{}", state);

    while !state.is_terminal() {
        let mover = state.next_to_move();
        // Each move gets its own rollout stream drawn from the master seed,
        // so a fixed --seed reproduces the whole game.
        let rollout = UniformRandom::seeded(master.gen());

        let action = choose_move(&state, rollout, search_config.clone(), &budget)?;
        state = state.apply(&action)?;
        ply += 1;

        info!(%mover, ply, action = ?action, "move played");
        println!("{}", state);
    }

    let result = state.result()?;
    info!(%result, ply, "game over");
    println!("{}", result);
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;

    info!(game = ?config.game, "selfplay starting");

    match config.game {
        GameChoice::Tictactoe => play(games_tictactoe::State::new(), &config),
        GameChoice::Connect4 => play(
            games_connect4::State::with_win_length(config.win_length),
            &config,
        ),
    }
}

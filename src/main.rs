//! rust-psynth: play the hex tree-growing game in a terminal.
//!
//! ## Usage
//!
//! - `rust-psynth` - human against human on a radius-3 board
//! - `rust-psynth --red simple --blue advanced --diff-blue hard` - watch bots
//! - `rust-psynth --red random --blue simple --games 20` - run a series
//!
//! Set `RUST_LOG=debug` to see every move and rollout decision.

use std::io::BufRead;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rust_psynth::arena::{run_series, MatchConfig};
use rust_psynth::core::{Difficulty, GameConfig, PlayerColor, PlayerKind, SimKind};
use rust_psynth::players::{HumanInput, PlayerConfig};

/// Two-player hex board game with random, greedy and rollout bots
#[derive(Parser, Debug)]
#[command(name = "rust-psynth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board radius (1-5)
    #[arg(long, default_value_t = 3)]
    size: u8,

    /// Red player: human, random, simple, advanced
    #[arg(long, default_value = "human")]
    red: PlayerKind,

    /// Blue player: human, random, simple, advanced
    #[arg(long, default_value = "human")]
    blue: PlayerKind,

    /// Simulation policy of an advanced red player: random, simple
    #[arg(long, default_value = "simple")]
    sim_red: SimKind,

    /// Simulation policy of an advanced blue player: random, simple
    #[arg(long, default_value = "simple")]
    sim_blue: SimKind,

    /// Search budget of an advanced red player
    #[arg(long, default_value = "medium")]
    diff_red: Difficulty,

    /// Search budget of an advanced blue player
    #[arg(long, default_value = "medium")]
    diff_blue: Difficulty,

    /// Pause before bot moves, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Base random seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Rollout threads per advanced player
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

impl Cli {
    fn match_config(&self) -> Result<MatchConfig> {
        let game = GameConfig::new(self.size).context("invalid --size")?;
        Ok(MatchConfig::default()
            .with_game(game)
            .with_player(
                PlayerColor::Red,
                PlayerConfig::new(self.red)
                    .with_sim(self.sim_red)
                    .with_difficulty(self.diff_red),
            )
            .with_player(
                PlayerColor::Blue,
                PlayerConfig::new(self.blue)
                    .with_sim(self.sim_blue)
                    .with_difficulty(self.diff_blue),
            )
            .with_delay(Duration::from_millis(self.delay))
            .with_games(self.games)
            .with_seed(self.seed)
            .with_workers(self.workers))
    }
}

/// Forward stdin lines to a channel until stdin closes.
fn spawn_stdin_reader() -> HumanInput {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    Arc::new(Mutex::new(rx))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.games == 0 {
        anyhow::bail!("--games must be at least 1");
    }
    let config = cli.match_config()?;
    info!(
        "radius {}, {:?} vs {:?}, {} game(s), seed {}",
        config.game.radius(),
        config.players[PlayerColor::Red].kind,
        config.players[PlayerColor::Blue].kind,
        config.games,
        config.seed
    );

    let input = config.has_human().then(spawn_stdin_reader);
    let report = run_series(&config, input.as_ref())?;
    println!("{report}");
    Ok(())
}

//! Participants of a match.
//!
//! ## Contract
//!
//! The match driver talks to every participant through [`Player`]:
//!
//! 1. `request()` on the player to move, which proposes a move for its
//!    current phase (possibly illegal, the referee decides)
//! 2. `confirm(status)` on the same player with the referee's verdict
//! 3. `update(move, status)` on the other player
//!
//! Each player keeps a [`Seat`], a private copy of the game that replays
//! every move. If a replayed status disagrees with the reported one the
//! player fails with `PlayerError::StatusMismatch` and the match aborts.
//!
//! ## Variants
//!
//! - [`HumanPlayer`]: moves typed as text
//! - [`BotPlayer`] over `RandomPolicy`, `HeuristicPolicy` or `RolloutPolicy`
//!
//! The variant is fixed at construction by [`build_player`].

pub mod bot;
pub mod human;
pub mod seat;

pub use bot::BotPlayer;
pub use human::{HumanInput, HumanPlayer};
pub use seat::Seat;

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameRng, Move, PlayerColor, PlayerError, PlayerKind, SimKind, Status};
use crate::search::{HeuristicPolicy, RandomPolicy, RolloutConfig, RolloutPolicy};

/// A participant in a match.
pub trait Player: Send {
    fn color(&self) -> PlayerColor;

    fn kind(&self) -> PlayerKind;

    /// Propose a move for this player's current phase.
    fn request(&mut self) -> Result<Move, PlayerError>;

    /// Receive the referee's verdict on the last requested move.
    fn confirm(&mut self, status: Status) -> Result<(), PlayerError>;

    /// Receive the opponent's move and the referee's verdict on it.
    fn update(&mut self, opponent_move: &Move, status: Status) -> Result<(), PlayerError>;
}

/// Who plays one color, and how.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    /// Simulation policy of a rollout player.
    pub sim: SimKind,
    /// Search budget of a rollout player.
    pub difficulty: Difficulty,
}

impl PlayerConfig {
    #[must_use]
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_sim(mut self, sim: SimKind) -> Self {
        self.sim = sim;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Construct the player described by `config`.
///
/// Human players read from `input` and print to stdout; asking for one
/// without an input source fails with `PlayerError::InputClosed`.
pub fn build_player(
    color: PlayerColor,
    config: &PlayerConfig,
    radius: u8,
    workers: usize,
    rng: GameRng,
    input: Option<&HumanInput>,
) -> Result<Box<dyn Player>, PlayerError> {
    let player: Box<dyn Player> = match config.kind {
        PlayerKind::Human => {
            let input = input.ok_or(PlayerError::InputClosed(color))?;
            Box::new(HumanPlayer::new(
                color,
                radius,
                input.clone(),
                Box::new(std::io::stdout()),
            )?)
        }
        PlayerKind::Random => Box::new(BotPlayer::new(color, radius, config.kind, RandomPolicy, rng)?),
        PlayerKind::Simple => Box::new(BotPlayer::new(color, radius, config.kind, HeuristicPolicy, rng)?),
        PlayerKind::Advanced => {
            let search = RolloutConfig::default()
                .with_difficulty(config.difficulty)
                .with_sim(config.sim)
                .with_workers(workers);
            Box::new(BotPlayer::new(
                color,
                radius,
                config.kind,
                RolloutPolicy::new(search),
                rng,
            )?)
        }
    };
    Ok(player)
}

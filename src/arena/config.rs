//! Match configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ColorMap, GameConfig, PlayerColor, PlayerKind};
use crate::players::PlayerConfig;

/// Everything the driver needs to run a series of games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub game: GameConfig,

    pub players: ColorMap<PlayerConfig>,

    /// Pause before each bot move that follows a legal move.
    pub delay: Duration,

    /// Games in the series.
    pub games: u32,

    /// Base seed. Each game and each player gets a forked stream.
    pub seed: u64,

    /// Rollout threads per advanced bot.
    pub workers: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            players: ColorMap::default(),
            delay: Duration::ZERO,
            games: 1,
            seed: 0,
            workers: 1,
        }
    }
}

impl MatchConfig {
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn with_player(mut self, color: PlayerColor, player: PlayerConfig) -> Self {
        self.players[color] = player;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Whether any seat reads from the terminal.
    #[must_use]
    pub fn has_human(&self) -> bool {
        self.players.iter().any(|(_, p)| p.kind == PlayerKind::Human)
    }
}

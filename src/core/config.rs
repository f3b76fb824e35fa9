//! Game and player configuration types.
//!
//! - `GameConfig`: board radius, validated on construction
//! - `Difficulty`: rollout budget scale for the rollout player
//! - `PlayerKind` / `SimKind`: which player variant sits at a color, and
//!   which policy the rollout player simulates with
//!
//! The engine only ever sees the resolved radius. The other types are
//! consumed by the player factory and the match driver.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{ConfigError, EngineError};

/// Smallest supported board radius.
pub const MIN_RADIUS: u8 = 1;
/// Largest supported board radius.
pub const MAX_RADIUS: u8 = 5;

/// Board configuration.
///
/// Deserializing goes through the same range check as `new`, so every
/// `GameConfig` in circulation holds a supported radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    radius: u8,
}

#[derive(Deserialize)]
struct RawGameConfig {
    radius: u8,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = EngineError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.radius)
    }
}

impl GameConfig {
    /// Create a config for a board of radius `k`.
    ///
    /// ```
    /// use rust_psynth::core::GameConfig;
    ///
    /// assert!(GameConfig::new(3).is_ok());
    /// assert!(GameConfig::new(0).is_err());
    /// assert!(GameConfig::new(6).is_err());
    /// ```
    pub fn new(radius: u8) -> Result<Self, EngineError> {
        if (MIN_RADIUS..=MAX_RADIUS).contains(&radius) {
            Ok(Self { radius })
        } else {
            Err(EngineError::InvalidBoardSize(radius))
        }
    }

    #[must_use]
    pub fn radius(&self) -> u8 {
        self.radius
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { radius: 3 }
    }
}

/// Rollout budget scale.
///
/// The rollout player tries `7d+7` candidates with `10d+10` rollouts each,
/// where `d` is `level()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    WaitingSimulator,
    Impossible,
}

impl Difficulty {
    #[must_use]
    pub const fn level(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::WaitingSimulator => 20,
            Difficulty::Impossible => 9001,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "waitingsimulator" => Ok(Difficulty::WaitingSimulator),
            "impossible" => Ok(Difficulty::Impossible),
            _ => Err(ConfigError::UnknownValue {
                what: "difficulty",
                value: s.to_string(),
                expected: "easy, medium, hard, waitingSimulator, impossible",
            }),
        }
    }
}

/// Who sits at a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Human,
    Random,
    Simple,
    Advanced,
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            "simple" => Ok(PlayerKind::Simple),
            "advanced" => Ok(PlayerKind::Advanced),
            _ => Err(ConfigError::UnknownValue {
                what: "player type",
                value: s.to_string(),
                expected: "human, random, simple, advanced",
            }),
        }
    }
}

/// Policy the rollout player uses to generate candidates and play out games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimKind {
    Random,
    #[default]
    Simple,
}

impl FromStr for SimKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(SimKind::Random),
            "simple" => Ok(SimKind::Simple),
            _ => Err(ConfigError::UnknownValue {
                what: "simulation player",
                value: s.to_string(),
                expected: "random, simple",
            }),
        }
    }
}

//! Game state: board, turn, per-color phases, sun and terminal status.
//!
//! ## Phases
//!
//! Each color walks `Prepare → Activate → Plant → Grow → Activate → …`.
//! Prepare happens once per game while free placements remain.
//!
//! ## Lifecycle
//!
//! `GameState` is created once per game and mutated only by
//! `RuleEngine::apply`. Once `game_over` is set it never changes again.
//! Every field is cheap to clone (`im` structures), which is what lets
//! snapshots and rollouts copy the whole state freely.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::hex::Hex;
use super::player::{ColorMap, PlayerColor};

/// Number of sun positions per revolution.
pub const SUN_POSITIONS: u8 = 6;
/// Revolutions after which the game is scored.
pub const SUN_REVOLUTIONS: u8 = 6;

/// Per-color sub-turn stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Prepare,
    Activate,
    Plant,
    Grow,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Prepare => "Prepare",
            Phase::Activate => "Activate",
            Phase::Plant => "Plant",
            Phase::Grow => "Grow",
        };
        write!(f, "{name}")
    }
}

/// Outcome of the last applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Illegal,
    RedWin,
    BlueWin,
}

impl Status {
    /// The win status for `color`.
    #[must_use]
    pub const fn win_for(color: PlayerColor) -> Self {
        match color {
            PlayerColor::Red => Status::RedWin,
            PlayerColor::Blue => Status::BlueWin,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Status::RedWin | Status::BlueWin)
    }

    #[must_use]
    pub const fn winner(self) -> Option<PlayerColor> {
        match self {
            Status::RedWin => Some(PlayerColor::Red),
            Status::BlueWin => Some(PlayerColor::Blue),
            Status::Ok | Status::Illegal => None,
        }
    }
}

/// Complete game state apart from the two inventories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: PlayerColor,
    pub(crate) phases: ColorMap<Phase>,
    pub(crate) round: u32,
    pub(crate) sun_pos: u8,
    pub(crate) sun_revolutions: u8,
    /// Cells consumed this sub-turn.
    pub(crate) used: OrdSet<Hex>,
    /// Completions so far, indexed by hex-distance from the center.
    pub(crate) completed_by_distance: Vector<u32>,
    pub(crate) status: Status,
    pub(crate) game_over: bool,
}

impl GameState {
    /// Fresh state: both colors in Prepare, Red to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let radius = config.radius();
        Self {
            board: Board::new(config),
            turn: PlayerColor::Red,
            phases: ColorMap::with_value(Phase::Prepare),
            round: 0,
            sun_pos: 0,
            sun_revolutions: 0,
            used: OrdSet::new(),
            completed_by_distance: std::iter::repeat(0).take(radius as usize + 1).collect(),
            status: Status::Ok,
            game_over: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn radius(&self) -> u8 {
        self.board.radius()
    }

    #[must_use]
    pub fn turn(&self) -> PlayerColor {
        self.turn
    }

    #[must_use]
    pub fn phase_of(&self, color: PlayerColor) -> Phase {
        self.phases[color]
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn sun_pos(&self) -> u8 {
        self.sun_pos
    }

    #[must_use]
    pub fn sun_revolutions(&self) -> u8 {
        self.sun_revolutions
    }

    #[must_use]
    pub fn is_used(&self, hex: Hex) -> bool {
        self.used.contains(&hex)
    }

    /// Completions recorded at hex-distance `distance` from the center.
    #[must_use]
    pub fn completed_at(&self, distance: u32) -> u32 {
        self.completed_by_distance
            .get(distance as usize)
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

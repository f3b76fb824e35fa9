//! # rust-psynth
//!
//! Rule engine and bots for a two-player tree-growing game on a hexagonal
//! board lit by a rotating sun.
//!
//! ## Design Principles
//!
//! 1. **One Referee**: `RuleEngine` is the only code that mutates a game.
//!    Players and policies see read-only views or their own copies.
//!
//! 2. **Illegal Is Not An Error**: a rejected move yields `Status::Illegal`
//!    and leaves the position untouched. Hard errors are reserved for
//!    misuse, such as moving after the game ended.
//!
//! 3. **Cheap Copies**: board and inventories are persistent structures
//!    (`im`), so cloning an engine for a rollout is O(1).
//!
//! 4. **Reproducible**: all randomness flows through a seedable, forkable
//!    `GameRng`.
//!
//! ## Modules
//!
//! - `core`: coordinates, board, inventories, moves, notation, configuration
//! - `rules`: the rule engine and scoring
//! - `search`: random, heuristic and rollout move policies
//! - `players`: the player contract, bots and human input
//! - `arena`: match driver and series reports

pub mod arena;
pub mod core;
pub mod players;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    parse_move, Board, Cell, ColorMap, Difficulty, EngineError, GameConfig, GameRng, GameState,
    Hex, Inventory, Move, MoveParseError, Phase, PlantPair, PlayerColor, PlayerError, PlayerKind,
    SimKind, Snapshot, Status, Unit,
};

pub use crate::rules::{completion_points, decide_winner, RuleEngine};

pub use crate::search::{
    HeuristicPolicy, MovePolicy, RandomPolicy, RolloutConfig, RolloutDecision, RolloutPolicy,
    RolloutStats,
};

pub use crate::players::{build_player, BotPlayer, HumanPlayer, Player, PlayerConfig, Seat};

pub use crate::arena::{run_match, run_series, MatchConfig, MatchResult, SeriesReport};

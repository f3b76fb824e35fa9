//! Core value types: coordinates, colors, board, inventories, moves, state.
//!
//! Everything here is plain data with cheap clones. Game rules live in
//! `rules`; this module only knows how to store and render a position.

pub mod hex;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod moves;
pub mod notation;
pub mod board;
pub mod inventory;
pub mod state;
pub mod snapshot;

pub use hex::{Hex, DIRECTIONS};
pub use player::{ColorMap, PlayerColor};
pub use rng::GameRng;
pub use config::{Difficulty, GameConfig, PlayerKind, SimKind, MAX_RADIUS, MIN_RADIUS};
pub use error::{ConfigError, EngineError, MoveParseError, PlayerError};
pub use moves::{ActivationCounts, Move, PlantPair};
pub use notation::parse_move;
pub use board::{Board, Cell, Unit};
pub use inventory::{ClassCounts, Inventory};
pub use state::{GameState, Phase, Status, SUN_POSITIONS, SUN_REVOLUTIONS};
pub use snapshot::Snapshot;

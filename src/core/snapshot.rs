//! Read-only views of a game.
//!
//! A `Snapshot` owns its own copy of the state and both inventories. Taking
//! one is O(1) thanks to structural sharing, and later moves on the live
//! engine never show through.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::inventory::Inventory;
use super::player::{ColorMap, PlayerColor};
use super::state::{GameState, Phase, Status};

/// Immutable copy of a game at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    state: GameState,
    inventories: ColorMap<Inventory>,
}

impl Snapshot {
    pub(crate) fn new(state: GameState, inventories: ColorMap<Inventory>) -> Self {
        Self { state, inventories }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn inventory(&self, color: PlayerColor) -> &Inventory {
        &self.inventories[color]
    }

    #[must_use]
    pub fn turn(&self) -> PlayerColor {
        self.state.turn()
    }

    #[must_use]
    pub fn phase_of(&self, color: PlayerColor) -> Phase {
        self.state.phase_of(color)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state.board())?;
        writeln!(
            f,
            "round {}  sun {} (revolution {})  {} to move ({})",
            self.state.round(),
            self.state.sun_pos(),
            self.state.sun_revolutions(),
            self.state.turn(),
            self.state.phase_of(self.state.turn()),
        )?;
        for (color, inv) in self.inventories.iter() {
            writeln!(
                f,
                "{color:<5} energy {:>3}  points {:>3}  active {:?}  passive {:?}/{:?}",
                inv.energy(),
                inv.points(),
                inv.active(),
                inv.passive(),
                inv.max_passive(),
            )?;
        }
        Ok(())
    }
}

//! A player's private copy of the game.

use crate::core::{EngineError, Move, PlayerColor, PlayerError, Status};
use crate::rules::RuleEngine;

/// Local mirror of the referee's engine.
///
/// Every move the referee applies is replayed here, and the status the
/// mirror derives is compared with the one the referee reported. A reported
/// win is always accepted. Any other disagreement means the two copies have
/// diverged and the match cannot continue.
#[derive(Clone, Debug)]
pub struct Seat {
    color: PlayerColor,
    engine: RuleEngine,
    pending: Option<Move>,
}

impl Seat {
    pub fn new(color: PlayerColor, radius: u8) -> Result<Self, EngineError> {
        Ok(Self {
            color,
            engine: RuleEngine::new(radius)?,
            pending: None,
        })
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The mirrored position.
    #[must_use]
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Remember the move just handed to the referee.
    pub fn submit(&mut self, mv: Move) {
        self.pending = Some(mv);
    }

    /// Replay our own submitted move with the referee's verdict.
    pub fn confirm(&mut self, reported: Status) -> Result<(), PlayerError> {
        let mv = self
            .pending
            .take()
            .ok_or(PlayerError::NothingToConfirm(self.color))?;
        self.replay(&mv, reported)
    }

    /// Replay the opponent's move with the referee's verdict.
    pub fn update(&mut self, opponent_move: &Move, reported: Status) -> Result<(), PlayerError> {
        self.replay(opponent_move, reported)
    }

    fn replay(&mut self, mv: &Move, reported: Status) -> Result<(), PlayerError> {
        let derived = self.engine.apply(mv)?;
        if reported.is_win() || reported == derived {
            Ok(())
        } else {
            Err(PlayerError::StatusMismatch {
                color: self.color,
                reported,
                derived,
            })
        }
    }
}

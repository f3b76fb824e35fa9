//! Players driven by a move policy.

use crate::core::{EngineError, GameRng, Move, PlayerColor, PlayerError, PlayerKind, Status};
use crate::search::MovePolicy;

use super::seat::Seat;
use super::Player;

/// A computer player: a policy, its own RNG stream and a local mirror.
pub struct BotPlayer<P: MovePolicy> {
    seat: Seat,
    policy: P,
    rng: GameRng,
    kind: PlayerKind,
}

impl<P: MovePolicy> BotPlayer<P> {
    pub fn new(
        color: PlayerColor,
        radius: u8,
        kind: PlayerKind,
        policy: P,
        rng: GameRng,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            seat: Seat::new(color, radius)?,
            policy,
            rng,
            kind,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub fn seat(&self) -> &Seat {
        &self.seat
    }
}

impl<P: MovePolicy> Player for BotPlayer<P> {
    fn color(&self) -> PlayerColor {
        self.seat.color()
    }

    fn kind(&self) -> PlayerKind {
        self.kind
    }

    fn request(&mut self) -> Result<Move, PlayerError> {
        let mv = self.policy.choose_move(self.seat.engine(), &mut self.rng);
        self.seat.submit(mv.clone());
        Ok(mv)
    }

    fn confirm(&mut self, status: Status) -> Result<(), PlayerError> {
        self.seat.confirm(status)
    }

    fn update(&mut self, opponent_move: &Move, status: Status) -> Result<(), PlayerError> {
        self.seat.update(opponent_move, status)
    }
}

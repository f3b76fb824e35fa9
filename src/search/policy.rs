//! Move policies.
//!
//! A `MovePolicy` proposes a move for whoever is to move in the given
//! position. Policies only read the position and call the engine's pure
//! legality predicates; they never mutate the engine they are handed.
//!
//! Implementations:
//! - `RandomPolicy`: uniform-ish random legal moves
//! - `HeuristicPolicy`: greedy energy maximization
//! - `RolloutPolicy`: flat Monte-Carlo evaluation on top of either

use crate::core::{GameRng, Hex, Move, PlayerColor, SimKind};
use crate::rules::RuleEngine;

use super::heuristic::HeuristicPolicy;
use super::random::RandomPolicy;

/// Strategy for choosing the next move.
pub trait MovePolicy: Send + Sync {
    /// Propose a move for `engine.turn()` in its current phase.
    ///
    /// The result should be legal; callers still check it.
    fn choose_move(&self, engine: &RuleEngine, rng: &mut GameRng) -> Move;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Build the policy a rollout player simulates with.
#[must_use]
pub fn simulation_policy(kind: SimKind) -> Box<dyn MovePolicy> {
    match kind {
        SimKind::Random => Box::new(RandomPolicy),
        SimKind::Simple => Box::new(HeuristicPolicy),
    }
}

/// Cells holding `color`'s units, in set order.
pub(crate) fn own_units(engine: &RuleEngine, color: PlayerColor) -> Vec<Hex> {
    engine.inventory(color).planted().iter().copied().collect()
}

/// Propose a move and fall back to `Empty` if the engine would reject it.
pub(crate) fn legal_or_empty(policy: &dyn MovePolicy, engine: &RuleEngine, rng: &mut GameRng) -> Move {
    let mv = policy.choose_move(engine, rng);
    if engine.is_legal(&mv) {
        mv
    } else {
        log::debug!("{} proposed illegal move {mv}, passing instead", policy.name());
        Move::Empty
    }
}

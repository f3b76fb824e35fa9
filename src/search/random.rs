//! Random legal-move sampler.

use smallvec::SmallVec;

use crate::core::{GameRng, Hex, Move, Phase, PlantPair};
use crate::rules::RuleEngine;

use super::policy::{own_units, MovePolicy};

/// Chance that an otherwise valid Plant move is replaced by a pass.
const PLANT_SKIP_PROBABILITY: f64 = 0.1;
/// Chance that each Activate class asks for one element.
const ACTIVATE_PROBABILITY: f64 = 1.0 / 3.0;
/// Chance that a Grow candidate is dropped while pruning.
const GROW_DROP_PROBABILITY: f64 = 0.6;
const MAX_ACTIVATE_ATTEMPTS: usize = 64;

/// Samples random moves and keeps the first legal one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    fn prepare(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let radius = u32::from(engine.radius());
        let spots: Vec<Hex> = engine
            .board()
            .ring(radius)
            .filter(|&hex| engine.is_preparable(hex))
            .collect();
        rng.choose(&spots).copied().map_or(Move::Empty, Move::Prepare)
    }

    fn activate(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let inv = engine.inventory(engine.turn());
        if inv.energy() == 0 || !inv.has_passive() {
            return Move::Empty;
        }

        let classes = inv.passive().len();
        for _ in 0..MAX_ACTIVATE_ATTEMPTS {
            let counts: SmallVec<[u32; 6]> = (0..classes)
                .map(|_| u32::from(rng.gen_bool(ACTIVATE_PROBABILITY)))
                .collect();
            if engine.is_activatable(&counts) {
                return Move::Activate(counts);
            }
        }
        Move::Empty
    }

    fn plant(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let color = engine.turn();
        if engine.inventory(color).energy() == 0 {
            return Move::Empty;
        }

        let board = engine.board();
        let mut trees = own_units(engine, color);
        rng.shuffle(&mut trees);

        let mut pairs: Vec<PlantPair> = Vec::new();
        for from in trees {
            let Some(tree) = board.unit(from) else {
                continue;
            };
            let reach = u32::from(tree.size);
            for to in board.hexes().filter(|&to| from.distance(to) == reach) {
                pairs.push(PlantPair::new(from, to));
                if !engine.is_plantable(&pairs) {
                    pairs.pop();
                }
            }
        }

        if pairs.is_empty() || rng.gen_bool(PLANT_SKIP_PROBABILITY) {
            return Move::Empty;
        }
        Move::plant(pairs)
    }

    fn grow(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let color = engine.turn();
        let mut energy_left = engine.inventory(color).energy();
        if energy_left == 0 {
            return Move::Empty;
        }

        let board = engine.board();
        let mut units = own_units(engine, color);
        rng.shuffle(&mut units);

        let mut picked: Vec<Hex> = Vec::new();
        for hex in units {
            let Some(unit) = board.unit(hex) else {
                continue;
            };
            let cost = u32::from(unit.size) + 1;
            if energy_left < cost {
                continue;
            }
            picked.push(hex);
            energy_left -= cost;
        }

        while !engine.is_growable(&picked) {
            picked.retain(|_| !rng.gen_bool(GROW_DROP_PROBABILITY));
        }

        if picked.is_empty() {
            Move::Empty
        } else {
            Move::grow(picked)
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&self, engine: &RuleEngine, rng: &mut GameRng) -> Move {
        if engine.is_game_over() {
            return Move::Empty;
        }
        match engine.current_phase() {
            Phase::Prepare => Self::prepare(engine, rng),
            Phase::Activate => Self::activate(engine, rng),
            Phase::Plant => Self::plant(engine, rng),
            Phase::Grow => Self::grow(engine, rng),
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

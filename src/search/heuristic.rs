//! Greedy energy-maximizing policy.
//!
//! Placement moves (Prepare, Plant) are scored on a hypothetical board where
//! every unit already stands at full size `k`, with the candidate unit added
//! at full size too. The score is the mover's production summed over all six
//! sun positions. Activate and Grow pack the energy budget greedily.

use smallvec::SmallVec;

use crate::core::{GameRng, Hex, Move, Phase, PlantPair, Unit};
use crate::rules::RuleEngine;

use super::policy::{own_units, MovePolicy};

/// Greedy policy that prefers moves with the most potential sunlight.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// Best ring cell for a free tree; ties keep the first cell found.
    fn prepare(engine: &RuleEngine) -> Move {
        let color = engine.turn();
        let radius = engine.radius();
        let boosted = engine.board().with_all_units_at(radius);
        let mut owned = own_units(engine, color);

        let mut best: Option<(u32, Hex)> = None;
        for hex in engine.board().ring(u32::from(radius)) {
            if !engine.is_preparable(hex) {
                continue;
            }
            owned.push(hex);
            let score = boosted
                .with_unit(hex, Unit::new(color, radius))
                .total_production(&owned);
            owned.pop();

            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, hex));
            }
        }
        best.map_or(Move::Empty, |(_, hex)| Move::Prepare(hex))
    }

    /// Activate the classes the mover can currently use, then keep a random
    /// non-empty share of each.
    fn activate(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let color = engine.turn();
        let inv = engine.inventory(color);
        if inv.energy() == 0 || !inv.has_passive() {
            return Move::Empty;
        }

        let classes = inv.passive().len();
        let mut on_board: SmallVec<[u32; 6]> = SmallVec::from_elem(0, classes);
        for (_, unit) in engine.board().units().filter(|(_, u)| u.owner == color) {
            if let Some(slot) = on_board.get_mut(unit.size as usize) {
                *slot += 1;
            }
        }

        let mut budget = inv.energy();
        let mut counts: SmallVec<[u32; 6]> = SmallVec::from_elem(0, classes);
        for class in 0..classes {
            if class > 0 && on_board[class - 1] == 0 {
                continue;
            }
            let max = inv.max_passive()[class];
            let mut left = inv.passive()[class];
            while left > 0 {
                let cost = if left * 2 >= max { class as u32 + 1 } else { class as u32 + 2 };
                if budget < cost {
                    break;
                }
                budget -= cost;
                left -= 1;
                counts[class] += 1;
            }
        }

        for count in counts.iter_mut().filter(|c| **c > 0) {
            *count = rng.gen_range_usize(1..*count as usize + 1) as u32;
        }

        while !engine.is_activatable(&counts) {
            match counts.iter_mut().rev().find(|c| **c > 0) {
                Some(count) => *count -= 1,
                None => break,
            }
        }

        if counts.iter().all(|&c| c == 0) {
            Move::Empty
        } else {
            Move::Activate(counts)
        }
    }

    /// Score every single legal seed throw, pack best-first, then keep a
    /// random non-empty prefix.
    fn plant(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let color = engine.turn();
        let inv = engine.inventory(color);
        if inv.energy() == 0 || inv.active()[0] == 0 {
            return Move::Empty;
        }

        let radius = engine.radius();
        let board = engine.board();
        let boosted = board.with_all_units_at(radius);
        let mut owned = own_units(engine, color);
        rng.shuffle(&mut owned);

        let mut scored: Vec<(u32, PlantPair)> = Vec::new();
        for &from in &owned {
            let Some(tree) = board.unit(from) else {
                continue;
            };
            let reach = u32::from(tree.size);
            for to in board.hexes().filter(|&to| from.distance(to) == reach) {
                let pair = PlantPair::new(from, to);
                if !engine.is_plantable(&[pair]) {
                    continue;
                }
                let mut with_seed = owned.clone();
                with_seed.push(to);
                let score = boosted
                    .with_unit(to, Unit::new(color, radius))
                    .total_production(&with_seed);
                scored.push((score, pair));
            }
        }
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let mut pairs: Vec<PlantPair> = Vec::new();
        for (_, pair) in scored {
            pairs.push(pair);
            if !engine.is_plantable(&pairs) {
                pairs.pop();
            }
        }
        if pairs.is_empty() {
            return Move::Empty;
        }

        let keep = rng.gen_range_usize(1..pairs.len() + 1);
        pairs.truncate(keep);
        Move::plant(pairs)
    }

    /// Score each growable unit by the mover's production after growing it
    /// alone, then pack best-first.
    fn grow(engine: &RuleEngine, rng: &mut GameRng) -> Move {
        let color = engine.turn();
        if engine.inventory(color).energy() == 0 {
            return Move::Empty;
        }

        let board = engine.board();
        let mut owned = own_units(engine, color);
        rng.shuffle(&mut owned);

        let mut scored: Vec<(u32, Hex)> = Vec::new();
        for &hex in &owned {
            if !engine.is_growable(&[hex]) {
                continue;
            }
            let Some(unit) = board.unit(hex) else {
                continue;
            };
            let score = board
                .with_unit(hex, Unit::new(color, unit.size + 1))
                .total_production(&owned);
            scored.push((score, hex));
        }
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let mut picked: Vec<Hex> = Vec::new();
        for (_, hex) in scored {
            picked.push(hex);
            if !engine.is_growable(&picked) {
                picked.pop();
            }
        }

        if picked.is_empty() {
            Move::Empty
        } else {
            Move::grow(picked)
        }
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(&self, engine: &RuleEngine, rng: &mut GameRng) -> Move {
        if engine.is_game_over() {
            return Move::Empty;
        }
        match engine.current_phase() {
            Phase::Prepare => Self::prepare(engine),
            Phase::Activate => Self::activate(engine, rng),
            Phase::Plant => Self::plant(engine, rng),
            Phase::Grow => Self::grow(engine, rng),
        }
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerColor, Status};

    /// Radius-2 game after both players placed their free trees.
    /// Red owns (0,0) and (0,2), Red to move in Activate.
    fn prepared_game() -> RuleEngine {
        let mut engine = RuleEngine::new(2).unwrap();
        for hex in [Hex::new(0, 0), Hex::new(4, 4), Hex::new(0, 2), Hex::new(4, 2)] {
            engine.apply(&Move::Prepare(hex)).unwrap();
        }
        engine
    }

    #[test]
    fn test_prepare_returns_preparable_cells() {
        let mut engine = RuleEngine::new(2).unwrap();
        let mut rng = GameRng::new(0);
        for _ in 0..4 {
            let mv = HeuristicPolicy.choose_move(&engine, &mut rng);
            let Move::Prepare(hex) = mv else {
                panic!("expected prepare, got {mv:?}");
            };
            assert!(engine.is_preparable(hex));
            engine.apply(&mv).unwrap();
        }
        assert_eq!(engine.current_phase(), Phase::Activate);
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let engine = RuleEngine::new(3).unwrap();
        let a = HeuristicPolicy.choose_move(&engine, &mut GameRng::new(1));
        let b = HeuristicPolicy.choose_move(&engine, &mut GameRng::new(2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_activate_only_affordable() {
        let mut engine = prepared_game();
        engine.inventory_mut(PlayerColor::Red).energy = 4;
        for seed in 0..10 {
            let mv = HeuristicPolicy.choose_move(&engine, &mut GameRng::new(seed));
            assert!(matches!(mv, Move::Activate(_)), "{mv:?}");
            assert!(engine.is_legal(&mv));
        }
    }

    #[test]
    fn test_plant_throws_one_seed() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        assert_eq!(engine.current_phase(), Phase::Plant);

        // one active seed: exactly one pair fits
        let mv = HeuristicPolicy.choose_move(&engine, &mut GameRng::new(4));
        let Move::Plant(ref pairs) = mv else {
            panic!("expected plant, got {mv:?}");
        };
        assert_eq!(pairs.len(), 1);
        assert!(engine.is_legal(&mv));
    }

    #[test]
    fn test_grow_packs_within_active_stock() {
        let mut engine = prepared_game();
        engine.inventory_mut(PlayerColor::Red).energy = 10;
        engine.apply(&Move::activate(&[0, 0, 1])).unwrap();
        engine.apply(&Move::Empty).unwrap();
        assert_eq!(engine.current_phase(), Phase::Grow);

        // a single size-2 element: only one of the two trees can grow
        let mv = HeuristicPolicy.choose_move(&engine, &mut GameRng::new(5));
        let Move::Grow(ref hexes) = mv else {
            panic!("expected grow, got {mv:?}");
        };
        assert_eq!(hexes.len(), 1);
        assert!(engine.is_legal(&mv));
    }

    #[test]
    fn test_moves_are_always_legal() {
        for seed in 0..3 {
            let mut engine = RuleEngine::new(2).unwrap();
            let mut rng = GameRng::new(seed);
            let mut plies = 0;
            while !engine.is_game_over() {
                let mv = HeuristicPolicy.choose_move(&engine, &mut rng);
                assert!(engine.is_legal(&mv), "seed {seed}: illegal {mv:?}");
                assert_ne!(engine.apply(&mv).unwrap(), Status::Illegal);
                plies += 1;
                assert!(plies < 5_000);
            }
        }
    }
}

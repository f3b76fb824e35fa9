//! The authoritative rule engine.
//!
//! `RuleEngine` owns the live `GameState` and both inventories. It is the
//! only place that mutates them: everything else reads through
//! `snapshot()` and the pure legality predicates.
//!
//! ## Turn structure
//!
//! - Prepare: players alternate single placements until their free
//!   placements run out. When Blue runs out, sunshine is paid once.
//! - Activate → Plant → Grow: the mover keeps the turn between these.
//! - After Grow the turn passes. After Blue's Grow the sun rotates,
//!   sunshine is paid and the round counter advances.
//!
//! A move whose tag does not match the mover's phase, or that fails its
//! predicate, leaves the position untouched and reports `Status::Illegal`.
//! `Empty` is legal in every phase and only advances it.
//!
//! ## Cloning
//!
//! Every field is a persistent structure, so `clone()` is O(1). Rollout
//! search clones the engine once per simulated game.

use log::debug;

use crate::core::{
    Board, ColorMap, EngineError, GameConfig, GameState, Hex, Inventory, Move, Phase, PlantPair,
    PlayerColor, Snapshot, Status, Unit, SUN_POSITIONS, SUN_REVOLUTIONS,
};

use super::scoring::{completion_points, decide_winner};

/// Game referee: legality checks and move application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleEngine {
    state: GameState,
    inventories: ColorMap<Inventory>,
}

impl RuleEngine {
    /// Create a fresh game on a board of radius `k` (1..=5).
    pub fn new(radius: u8) -> Result<Self, EngineError> {
        GameConfig::new(radius).map(Self::from_config)
    }

    /// Create a fresh game from an already validated config.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            inventories: ColorMap::new(|_| Inventory::new(config)),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn radius(&self) -> u8 {
        self.state.radius()
    }

    /// Deep, independent copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.clone(), self.inventories.clone())
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

    /// Phase of the player to move.
    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.state.phase_of(self.state.turn())
    }

    /// Completed rounds (one per full sun step).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.state.status().winner()
    }

    fn mover(&self) -> &Inventory {
        &self.inventories[self.state.turn]
    }

    // === Legality ===

    /// Whether the mover may place a free tree at `hex`.
    #[must_use]
    pub fn is_preparable(&self, hex: Hex) -> bool {
        let board = self.board();
        self.mover().prepare_left > 0
            && board.is_empty_cell(hex)
            && board.center().distance(hex) == u32::from(self.radius())
    }

    /// Whether the mover can afford to activate `counts[i]` elements of
    /// each class `i`.
    ///
    /// At most `k+1` counts are accepted, even when the extra ones are zero.
    /// All elements of one
    /// class cost the same, priced on the passive stock before the move.
    #[must_use]
    pub fn is_activatable(&self, counts: &[u32]) -> bool {
        let inv = self.mover();
        if counts.len() > inv.passive.len() {
            return false;
        }
        let mut energy_left = i64::from(inv.energy);

        for (class, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let Some(&passive) = inv.passive.get(class) else {
                return false;
            };
            if passive < count {
                return false;
            }
            energy_left -= i64::from(count) * i64::from(inv.activation_cost(class));
            if energy_left < 0 {
                return false;
            }
        }
        true
    }

    /// Whether the mover can throw every seed in `pairs`.
    ///
    /// No cell may appear twice across pairs or have been used earlier in
    /// this turn.
    #[must_use]
    pub fn is_plantable(&self, pairs: &[PlantPair]) -> bool {
        let mover = self.state.turn;
        let inv = self.mover();
        let board = self.board();
        let seeds = pairs.len() as u64;

        if u64::from(inv.energy) < seeds || u64::from(inv.active[0]) < seeds {
            return false;
        }

        let mut used = self.state.used.clone();
        for pair in pairs {
            let Some(tree) = board.unit(pair.from) else {
                return false;
            };
            if tree.owner != mover || !board.is_empty_cell(pair.to) {
                return false;
            }
            if pair.from.distance(pair.to) != u32::from(tree.size) {
                return false;
            }
            if used.contains(&pair.from) || used.contains(&pair.to) {
                return false;
            }
            used.insert(pair.from);
            used.insert(pair.to);
        }
        true
    }

    /// Whether the mover can grow every unit in `hexes` by one size.
    ///
    /// Each growth costs the new size in energy and the energy left must
    /// stay positive after every step. Growth that stays within the board
    /// radius consumes an active element of the new size.
    #[must_use]
    pub fn is_growable(&self, hexes: &[Hex]) -> bool {
        let mover = self.state.turn;
        let inv = self.mover();
        let board = self.board();
        let radius = u32::from(self.radius());

        let mut used = self.state.used.clone();
        let mut active = inv.active.clone();
        let mut energy_left = i64::from(inv.energy);

        for &hex in hexes {
            let Some(unit) = board.unit(hex) else {
                return false;
            };
            if unit.owner != mover || used.contains(&hex) {
                return false;
            }

            let new_size = u32::from(unit.size) + 1;
            energy_left -= i64::from(new_size);
            if energy_left <= 0 {
                return false;
            }
            used.insert(hex);

            if new_size <= radius {
                let slot = &mut active[new_size as usize];
                if *slot == 0 {
                    return false;
                }
                *slot -= 1;
            }
        }
        true
    }

    /// Whether `mv` would be accepted for the player to move.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        if self.is_game_over() {
            return false;
        }
        match mv.phase() {
            None => true,
            Some(phase) if phase != self.current_phase() => false,
            Some(_) => match mv {
                Move::Prepare(hex) => self.is_preparable(*hex),
                Move::Activate(counts) => self.is_activatable(counts),
                Move::Plant(pairs) => self.is_plantable(pairs),
                Move::Grow(hexes) => self.is_growable(hexes),
                Move::Empty | Move::Surrender => true,
            },
        }
    }

    // === Application ===

    /// Apply `mv` for the player to move.
    ///
    /// Returns the resulting status. Illegal moves are reported as
    /// `Status::Illegal` and change nothing else. Fails only once the game
    /// is over.
    pub fn apply(&mut self, mv: &Move) -> Result<Status, EngineError> {
        if self.state.game_over {
            return Err(EngineError::GameOver);
        }

        let mover = self.state.turn;

        if let Move::Surrender = mv {
            self.state.status = Status::win_for(mover.opponent());
            self.state.game_over = true;
            debug!("{mover} surrendered, {} wins", mover.opponent());
            return Ok(self.state.status);
        }

        if !self.is_legal(mv) {
            debug!(
                "rejected {mover} move {mv} in phase {}",
                self.current_phase()
            );
            self.state.status = Status::Illegal;
            return Ok(Status::Illegal);
        }

        match mv {
            Move::Prepare(hex) => self.prepare(*hex),
            Move::Activate(counts) => self.activate(counts),
            Move::Plant(pairs) => self.plant(pairs),
            Move::Grow(hexes) => self.grow(hexes),
            Move::Empty | Move::Surrender => {}
        }
        self.state.status = Status::Ok;
        self.next_phase();

        Ok(self.state.status)
    }

    fn prepare(&mut self, hex: Hex) {
        let mover = self.state.turn;
        self.state.board.place(hex, Unit::new(mover, 1));

        let inv = &mut self.inventories[mover];
        inv.prepare_left -= 1;
        inv.active[1] = inv.active[1].saturating_sub(1);
        inv.planted.insert(hex);
    }

    fn activate(&mut self, counts: &[u32]) {
        self.state.used.clear();

        let inv = &mut self.inventories[self.state.turn];
        for (class, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let cost = count * inv.activation_cost(class);
            inv.energy -= cost;
            inv.active[class] += count;
            inv.passive[class] -= count;
        }
    }

    fn plant(&mut self, pairs: &[PlantPair]) {
        let mover = self.state.turn;
        for pair in pairs {
            self.state.used.insert(pair.from);
            self.state.used.insert(pair.to);
            self.state.board.place(pair.to, Unit::new(mover, 0));

            let inv = &mut self.inventories[mover];
            inv.planted.insert(pair.to);
            inv.active[0] -= 1;
        }
        self.inventories[mover].energy -= pairs.len() as u32;
    }

    fn grow(&mut self, hexes: &[Hex]) {
        let mover = self.state.turn;
        let radius = self.radius();
        let center = self.board().center();

        for &hex in hexes {
            let Some(unit) = self.state.board.unit(hex) else {
                continue;
            };
            self.state.used.insert(hex);

            let size = unit.size;
            let inv = &mut self.inventories[mover];
            inv.restock_passive(size as usize);
            inv.energy -= u32::from(size) + 1;

            if size + 1 > radius {
                let distance = center.distance(hex);
                let slot = distance as usize;
                let nth = self.state.completed_by_distance[slot] + 1;
                self.state.completed_by_distance.set(slot, nth);

                let points = completion_points(distance, nth);
                inv.points += points;
                inv.planted.remove(&hex);
                self.state.board.clear(hex);
                debug!("{mover} completed tree at {hex} (distance {distance}, #{nth}) for {points}");
            } else {
                inv.active[size as usize + 1] -= 1;
                self.state.board.place(hex, Unit::new(mover, size + 1));
            }
        }
    }

    // === Phase machine ===

    fn next_phase(&mut self) {
        let mover = self.state.turn;
        match self.state.phases[mover] {
            Phase::Prepare => {
                if self.inventories[mover].prepare_left == 0 {
                    if mover == PlayerColor::Blue {
                        self.sunshine();
                    }
                    self.state.phases[mover] = Phase::Activate;
                }
                self.state.turn = mover.opponent();
            }
            Phase::Activate => self.state.phases[mover] = Phase::Plant,
            Phase::Plant => self.state.phases[mover] = Phase::Grow,
            Phase::Grow => {
                if mover == PlayerColor::Blue {
                    self.rotate_sun();
                    self.sunshine();
                    self.state.round += 1;
                }
                if self.state.game_over {
                    return;
                }
                self.state.used.clear();
                self.state.phases[mover] = Phase::Activate;
                self.state.turn = mover.opponent();
            }
        }
    }

    fn rotate_sun(&mut self) {
        self.state.sun_pos += 1;
        if self.state.sun_pos >= SUN_POSITIONS {
            self.state.sun_pos = 0;
            self.state.sun_revolutions += 1;
            if self.state.sun_revolutions == SUN_REVOLUTIONS {
                self.finish();
            }
        }
    }

    /// Credit every planted unit's production at the current sun position.
    fn sunshine(&mut self) {
        let sun = self.state.sun_pos;
        for color in PlayerColor::ALL {
            let board = &self.state.board;
            let gained: u32 = self.inventories[color]
                .planted
                .iter()
                .map(|&hex| board.produced_energy(hex, sun))
                .sum();
            self.inventories[color].energy += gained;
        }
    }

    fn finish(&mut self) {
        let status = decide_winner(
            &self.inventories[PlayerColor::Red],
            &self.inventories[PlayerColor::Blue],
        );
        self.state.status = status;
        self.state.game_over = true;
        debug!(
            "game over after {} rounds: {status:?} (points {}:{}, energy {}:{})",
            self.state.round + 1,
            self.inventories[PlayerColor::Red].points,
            self.inventories[PlayerColor::Blue].points,
            self.inventories[PlayerColor::Red].energy,
            self.inventories[PlayerColor::Blue].energy,
        );
    }

    // === Test support ===

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn inventory_mut(&mut self, color: PlayerColor) -> &mut Inventory {
        &mut self.inventories[color]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PlayerColor = PlayerColor::Red;
    const BLUE: PlayerColor = PlayerColor::Blue;

    /// Radius-3 game where both players have placed their free trees.
    /// Red owns (0,0) and (0,3); Blue owns (6,6) and (6,3). Red to move,
    /// in Activate.
    fn prepared_game() -> RuleEngine {
        let mut engine = RuleEngine::new(3).unwrap();
        for hex in [Hex::new(0, 0), Hex::new(6, 6), Hex::new(0, 3), Hex::new(6, 3)] {
            assert_eq!(engine.apply(&Move::Prepare(hex)).unwrap(), Status::Ok);
        }
        assert_eq!(engine.turn(), RED);
        assert_eq!(engine.current_phase(), Phase::Activate);
        engine
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(RuleEngine::new(0).unwrap_err(), EngineError::InvalidBoardSize(0));
        assert_eq!(RuleEngine::new(6).unwrap_err(), EngineError::InvalidBoardSize(6));
    }

    #[test]
    fn test_preparable_only_on_outer_ring() {
        let engine = RuleEngine::new(3).unwrap();
        assert!(engine.is_preparable(Hex::new(0, 0)));
        assert!(engine.is_preparable(Hex::new(3, 0)));
        assert!(!engine.is_preparable(Hex::new(3, 3)));
        assert!(!engine.is_preparable(Hex::new(1, 1)));
        assert!(!engine.is_preparable(Hex::new(6, 0)));
        assert!(!engine.is_preparable(Hex::new(-1, 0)));
    }

    #[test]
    fn test_prepare_places_size_one() {
        let mut engine = RuleEngine::new(3).unwrap();
        engine.apply(&Move::Prepare(Hex::new(0, 0))).unwrap();

        assert_eq!(engine.board().unit(Hex::new(0, 0)), Some(Unit::new(RED, 1)));
        let inv = engine.inventory(RED);
        assert_eq!(inv.prepare_left(), 1);
        assert_eq!(inv.active()[1], 3);
        assert!(inv.planted().contains(&Hex::new(0, 0)));
        assert_eq!(engine.turn(), BLUE);
        assert!(!engine.is_preparable(Hex::new(0, 0)));
    }

    #[test]
    fn test_prepare_alternates_then_pays_sunshine() {
        let engine = prepared_game();
        // four lone size-1 trees on the rim: each gets full sun at position 0
        // unless shadowed; (0,0) looks toward (-1,-1), off the board
        assert_eq!(engine.inventory(RED).energy(), 2);
        assert_eq!(engine.inventory(BLUE).energy(), 2);
        assert_eq!(engine.phase_of(BLUE), Phase::Activate);
    }

    #[test]
    fn test_wrong_phase_is_illegal_and_keeps_turn() {
        let mut engine = RuleEngine::new(2).unwrap();
        let before = engine.snapshot();
        let status = engine.apply(&Move::grow([Hex::new(0, 0)])).unwrap();

        assert_eq!(status, Status::Illegal);
        assert_eq!(engine.status(), Status::Illegal);
        assert_eq!(engine.turn(), RED);
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.inventory(RED), before.inventory(RED));
    }

    #[test]
    fn test_activate_costs() {
        let mut engine = prepared_game();
        engine.inventory_mut(RED).energy = 10;
        // class 0: passive 4/4 -> 1 each; class 1: 4/4 -> 2 each
        assert!(engine.is_activatable(&[2, 1]));
        assert!(!engine.is_activatable(&[0, 0, 0, 3]));
        assert!(!engine.is_activatable(&[0, 0, 0, 0, 1]));
        assert!(engine.is_activatable(&[0, 0, 0, 0]));

        engine.apply(&Move::activate(&[2, 1])).unwrap();
        let inv = engine.inventory(RED);
        assert_eq!(inv.energy(), 6);
        assert_eq!(inv.active()[0], 4);
        assert_eq!(inv.passive()[0], 2);
        assert_eq!(inv.active()[1], 3);
        assert_eq!(inv.passive()[1], 3);
        assert_eq!(engine.current_phase(), Phase::Plant);
        assert_eq!(engine.turn(), RED);
    }

    #[test]
    fn test_activate_depleted_class_costs_more() {
        let mut engine = prepared_game();
        engine.inventory_mut(RED).energy = 6;
        engine.inventory_mut(RED).passive[3] = 0;
        engine.inventory_mut(RED).passive[2] = 1;
        // 1 < 3/2 -> 2 + 2
        assert!(engine.is_activatable(&[0, 0, 1]));
        assert!(!engine.is_activatable(&[0, 0, 1, 1]));
        engine.inventory_mut(RED).energy = 3;
        assert!(!engine.is_activatable(&[0, 0, 1]));
    }

    #[test]
    fn test_activate_rejects_extra_classes() {
        let mut engine = RuleEngine::new(1).unwrap();
        engine.apply(&Move::Prepare(Hex::new(0, 0))).unwrap();
        engine.apply(&Move::Prepare(Hex::new(2, 2))).unwrap();
        assert_eq!(engine.current_phase(), Phase::Activate);

        assert!(engine.is_activatable(&[]));
        assert!(engine.is_activatable(&[0, 0]));
        assert!(!engine.is_activatable(&[0, 0, 0]));
        assert!(!engine.is_activatable(&[0, 0, 0, 0, 0]));

        let before = engine.snapshot();
        let status = engine.apply(&Move::activate(&[0, 0, 0, 0, 0])).unwrap();
        assert_eq!(status, Status::Illegal);
        assert_eq!(engine.inventory(RED), before.inventory(RED));
        assert_eq!(engine.current_phase(), Phase::Activate);
    }

    #[test]
    fn test_activate_running_total() {
        let mut engine = prepared_game();
        engine.inventory_mut(RED).energy = 3;
        assert!(engine.is_activatable(&[3]));
        assert!(!engine.is_activatable(&[3, 1]));
        assert!(!engine.is_activatable(&[5]));
    }

    #[test]
    fn test_plant_distance_must_match_size() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        assert_eq!(engine.current_phase(), Phase::Plant);

        let from = Hex::new(0, 0);
        assert!(engine.is_plantable(&[PlantPair::new(from, Hex::new(1, 0))]));
        assert!(engine.is_plantable(&[PlantPair::new(from, Hex::new(1, 1))]));
        assert!(!engine.is_plantable(&[PlantPair::new(from, Hex::new(2, 2))]));
        // not own tree
        assert!(!engine.is_plantable(&[PlantPair::new(Hex::new(6, 6), Hex::new(5, 5))]));
        // target occupied
        assert!(!engine.is_plantable(&[PlantPair::new(from, from)]));
    }

    #[test]
    fn test_plant_rejects_reused_cells() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        let a = Hex::new(0, 0);
        let b = Hex::new(0, 3);
        let pairs = [PlantPair::new(a, Hex::new(1, 0)), PlantPair::new(a, Hex::new(0, 1))];
        assert!(!engine.is_plantable(&pairs));

        let ok = [PlantPair::new(a, Hex::new(1, 0)), PlantPair::new(b, Hex::new(1, 3))];
        assert!(engine.is_plantable(&ok));
    }

    #[test]
    fn test_plant_applies() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        let energy = engine.inventory(RED).energy();
        let seeds = engine.inventory(RED).active()[0];

        let mv = Move::plant([PlantPair::new(Hex::new(0, 0), Hex::new(1, 0))]);
        assert_eq!(engine.apply(&mv).unwrap(), Status::Ok);

        assert_eq!(engine.board().unit(Hex::new(1, 0)), Some(Unit::new(RED, 0)));
        let inv = engine.inventory(RED);
        assert_eq!(inv.energy(), energy - 1);
        assert_eq!(inv.active()[0], seeds - 1);
        assert!(inv.planted().contains(&Hex::new(1, 0)));
        assert!(engine.state.is_used(Hex::new(0, 0)));
        assert!(engine.state.is_used(Hex::new(1, 0)));
        assert_eq!(engine.current_phase(), Phase::Grow);

        // the tree that threw a seed cannot grow this turn
        assert!(!engine.is_growable(&[Hex::new(0, 0)]));
    }

    #[test]
    fn test_plant_needs_energy_and_seeds() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        let pair = [PlantPair::new(Hex::new(0, 0), Hex::new(1, 0))];

        engine.inventory_mut(RED).energy = 0;
        assert!(!engine.is_plantable(&pair));
        engine.inventory_mut(RED).energy = 5;
        engine.inventory_mut(RED).active[0] = 0;
        assert!(!engine.is_plantable(&pair));
    }

    #[test]
    fn test_grow_energy_must_stay_positive() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        engine.apply(&Move::Empty).unwrap();
        assert_eq!(engine.current_phase(), Phase::Grow);

        // size 1 -> 2 costs 2, needs active[2]
        engine.inventory_mut(RED).energy = 2;
        assert!(!engine.is_growable(&[Hex::new(0, 0)]));
        engine.inventory_mut(RED).energy = 3;
        assert!(engine.is_growable(&[Hex::new(0, 0)]));
        // active[2] is 1: only one tree can reach size 2
        engine.inventory_mut(RED).energy = 20;
        assert!(!engine.is_growable(&[Hex::new(0, 0), Hex::new(0, 3)]));
        // duplicates are rejected
        assert!(!engine.is_growable(&[Hex::new(0, 0), Hex::new(0, 0)]));
        // foreign units and empty cells are rejected
        assert!(!engine.is_growable(&[Hex::new(6, 6)]));
        assert!(!engine.is_growable(&[Hex::new(3, 3)]));
    }

    #[test]
    fn test_grow_applies_and_passes_turn() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        engine.apply(&Move::Empty).unwrap();
        engine.inventory_mut(RED).energy = 10;
        let passive_1 = engine.inventory(RED).passive()[1];

        assert_eq!(engine.apply(&Move::grow([Hex::new(0, 0)])).unwrap(), Status::Ok);

        assert_eq!(engine.board().unit(Hex::new(0, 0)), Some(Unit::new(RED, 2)));
        let inv = engine.inventory(RED);
        assert_eq!(inv.energy(), 8);
        assert_eq!(inv.active()[2], 0);
        // passive[1] was already full
        assert_eq!(inv.passive()[1], passive_1);
        assert_eq!(engine.turn(), BLUE);
        assert_eq!(engine.phase_of(RED), Phase::Activate);
        assert!(!engine.state.is_used(Hex::new(0, 0)));
    }

    #[test]
    fn test_grow_past_max_completes_tree() {
        let mut engine = prepared_game();
        engine.apply(&Move::Empty).unwrap();
        engine.apply(&Move::Empty).unwrap();

        let hex = Hex::new(0, 3);
        engine.state_mut().board.place(hex, Unit::new(RED, 3));
        engine.inventory_mut(RED).energy = 10;
        engine.inventory_mut(RED).passive[3] = 0;

        assert!(engine.is_growable(&[hex]));
        engine.apply(&Move::grow([hex])).unwrap();

        assert!(engine.board().is_empty_cell(hex));
        let inv = engine.inventory(RED);
        assert_eq!(inv.energy(), 6);
        assert_eq!(inv.points(), completion_points(3, 1));
        assert_eq!(inv.passive()[3], 1);
        assert!(!inv.planted().contains(&hex));
        assert_eq!(engine.state.completed_at(3), 1);
    }

    #[test]
    fn test_blue_grow_rotates_sun() {
        let mut engine = prepared_game();
        for _ in 0..3 {
            engine.apply(&Move::Empty).unwrap();
        }
        assert_eq!(engine.turn(), BLUE);
        assert_eq!(engine.state.sun_pos(), 0);
        for _ in 0..3 {
            engine.apply(&Move::Empty).unwrap();
        }
        assert_eq!(engine.state.sun_pos(), 1);
        assert_eq!(engine.state.round(), 1);
        assert_eq!(engine.turn(), RED);
    }

    #[test]
    fn test_surrender() {
        let mut engine = prepared_game();
        assert_eq!(engine.apply(&Move::Surrender).unwrap(), Status::BlueWin);
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some(BLUE));
        assert_eq!(engine.apply(&Move::Empty), Err(EngineError::GameOver));
    }

    #[test]
    fn test_full_game_of_passes_ends_after_six_revolutions() {
        let mut engine = prepared_game();
        let mut plies = 0;
        while !engine.is_game_over() {
            engine.apply(&Move::Empty).unwrap();
            plies += 1;
            assert!(plies < 10_000);
        }
        assert_eq!(plies, 36 * 6);
        assert_eq!(engine.state.sun_revolutions(), 6);
        assert!(engine.status().is_win());
        assert_eq!(engine.apply(&Move::Empty), Err(EngineError::GameOver));
    }

    #[test]
    fn test_is_legal_false_after_game_over() {
        let mut engine = prepared_game();
        engine.apply(&Move::Surrender).unwrap();
        assert!(!engine.is_legal(&Move::Empty));
    }
}

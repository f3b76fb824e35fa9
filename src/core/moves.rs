//! Move representation: one payload per phase.
//!
//! A move is a sum type with exactly one phase's payload populated, plus the
//! two phase-independent moves `Empty` (pass) and `Surrender`.
//!
//! ## Equality
//!
//! Equality and hashing are order-independent for list-valued payloads:
//! two `Plant` moves with the same pairs in a different order are the same
//! move, and likewise for `Grow`. `Activate` compares count vectors
//! positionally, ignoring trailing zero counts. Rollout search relies on
//! this to skip candidates it has already evaluated.
//!
//! ```
//! use rust_psynth::core::{Hex, Move};
//!
//! let a = Move::grow([Hex::new(1, 2), Hex::new(3, 3)]);
//! let b = Move::grow([Hex::new(3, 3), Hex::new(1, 2)]);
//! assert_eq!(a, b);
//!
//! assert_eq!(Move::activate(&[1, 0, 0]), Move::activate(&[1]));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

use super::hex::Hex;
use super::state::Phase;

/// Per-size-class counts of an Activate move. Index 0 is the seed class.
pub type ActivationCounts = SmallVec<[u32; 6]>;

/// One seed placement: a tree at `from` throws a seed onto `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlantPair {
    pub from: Hex,
    pub to: Hex,
}

impl PlantPair {
    #[must_use]
    pub const fn new(from: Hex, to: Hex) -> Self {
        Self { from, to }
    }
}

/// A move submitted by a player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Move {
    /// Place a free size-1 tree on the outer ring.
    Prepare(Hex),
    /// Convert passive elements to active ones, per size class.
    Activate(ActivationCounts),
    /// Throw seeds from own trees.
    Plant(SmallVec<[PlantPair; 4]>),
    /// Grow own units by one size (completing trees past the maximum).
    Grow(SmallVec<[Hex; 4]>),
    /// Pass; legal in every phase.
    Empty,
    /// Concede; the opponent wins immediately.
    Surrender,
}

impl Move {
    #[must_use]
    pub fn activate(counts: &[u32]) -> Self {
        Move::Activate(SmallVec::from_slice(counts))
    }

    #[must_use]
    pub fn plant(pairs: impl IntoIterator<Item = PlantPair>) -> Self {
        Move::Plant(pairs.into_iter().collect())
    }

    #[must_use]
    pub fn grow(hexes: impl IntoIterator<Item = Hex>) -> Self {
        Move::Grow(hexes.into_iter().collect())
    }

    /// The phase this move belongs to, or `None` for `Empty` and `Surrender`.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Move::Prepare(_) => Some(Phase::Prepare),
            Move::Activate(_) => Some(Phase::Activate),
            Move::Plant(_) => Some(Phase::Plant),
            Move::Grow(_) => Some(Phase::Grow),
            Move::Empty | Move::Surrender => None,
        }
    }

    fn canonical(&self) -> CanonicalMove<'_> {
        match self {
            Move::Prepare(hex) => CanonicalMove::Prepare(*hex),
            Move::Activate(counts) => {
                let len = counts.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
                CanonicalMove::Activate(&counts[..len])
            }
            Move::Plant(pairs) => {
                let mut sorted = pairs.clone();
                sorted.sort_unstable();
                CanonicalMove::Plant(sorted)
            }
            Move::Grow(hexes) => {
                let mut sorted = hexes.clone();
                sorted.sort_unstable();
                CanonicalMove::Grow(sorted)
            }
            Move::Empty => CanonicalMove::Empty,
            Move::Surrender => CanonicalMove::Surrender,
        }
    }
}

#[derive(PartialEq, Eq, Hash)]
enum CanonicalMove<'a> {
    Prepare(Hex),
    Activate(&'a [u32]),
    Plant(SmallVec<[PlantPair; 4]>),
    Grow(SmallVec<[Hex; 4]>),
    Empty,
    Surrender,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// Renders the textual move grammar accepted by `notation::parse_move`.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Prepare(hex) => write!(f, "{hex}"),
            Move::Activate(counts) => {
                for (i, c) in counts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
            Move::Plant(pairs) => {
                for (i, pair) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "[{},{}]", pair.from, pair.to)?;
                }
                Ok(())
            }
            Move::Grow(hexes) => {
                for (i, hex) in hexes.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{hex}")?;
                }
                Ok(())
            }
            Move::Empty => write!(f, "-"),
            Move::Surrender => write!(f, "surrender"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn pair(a: (i32, i32), b: (i32, i32)) -> PlantPair {
        PlantPair::new(Hex::new(a.0, a.1), Hex::new(b.0, b.1))
    }

    #[test]
    fn test_phase_tags() {
        assert_eq!(Move::Prepare(Hex::new(0, 0)).phase(), Some(Phase::Prepare));
        assert_eq!(Move::activate(&[0, 1]).phase(), Some(Phase::Activate));
        assert_eq!(Move::plant([]).phase(), Some(Phase::Plant));
        assert_eq!(Move::grow([]).phase(), Some(Phase::Grow));
        assert_eq!(Move::Empty.phase(), None);
        assert_eq!(Move::Surrender.phase(), None);
    }

    #[test]
    fn test_plant_equality_ignores_order() {
        let a = Move::plant([pair((1, 1), (2, 2)), pair((3, 3), (4, 4))]);
        let b = Move::plant([pair((3, 3), (4, 4)), pair((1, 1), (2, 2))]);
        let c = Move::plant([pair((1, 1), (2, 2))]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_grow_is_multiset() {
        let a = Move::grow([Hex::new(1, 1), Hex::new(1, 1), Hex::new(2, 2)]);
        let b = Move::grow([Hex::new(2, 2), Hex::new(1, 1), Hex::new(1, 1)]);
        let c = Move::grow([Hex::new(2, 2), Hex::new(2, 2), Hex::new(1, 1)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_activate_positional() {
        assert_eq!(Move::activate(&[1, 0, 2]), Move::activate(&[1, 0, 2, 0]));
        assert_ne!(Move::activate(&[1, 0, 2]), Move::activate(&[2, 0, 1]));
        assert_eq!(Move::activate(&[0, 0]), Move::activate(&[]));
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(Move::Empty, Move::Surrender);
        assert_ne!(Move::grow([]), Move::plant([]));
        assert_ne!(Move::Prepare(Hex::new(1, 1)), Move::grow([Hex::new(1, 1)]));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut seen = FxHashSet::default();
        seen.insert(Move::grow([Hex::new(0, 1), Hex::new(2, 3)]));
        assert!(seen.contains(&Move::grow([Hex::new(2, 3), Hex::new(0, 1)])));
        assert!(!seen.insert(Move::grow([Hex::new(2, 3), Hex::new(0, 1)])));
        assert!(seen.insert(Move::Empty));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Prepare(Hex::new(0, 3)).to_string(), "(0,3)");
        assert_eq!(Move::activate(&[1, 0, 2]).to_string(), "1 0 2");
        assert_eq!(
            Move::plant([pair((1, 1), (2, 2)), pair((3, 3), (4, 4))]).to_string(),
            "[(1,1),(2,2)]+[(3,3),(4,4)]"
        );
        assert_eq!(Move::grow([Hex::new(1, 2), Hex::new(3, 4)]).to_string(), "(1,2)+(3,4)");
        assert_eq!(Move::Empty.to_string(), "-");
    }

    #[test]
    fn test_serde() {
        let mv = Move::plant([pair((1, 1), (2, 2))]);
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}

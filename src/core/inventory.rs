//! Per-player resource ledger.
//!
//! Element pools are indexed by size class (index 0 is the seed class).
//! Active elements are spent by Plant and Grow; passive elements are banked
//! and turned active by Activate. Completed or grown-out units return one
//! passive element to their old class, capped at the class maximum.
//!
//! ## Initial stock for radius `k`
//!
//! - free placements: `ceil(2k/3)`
//! - `active[0] = k-1`, `active[k-i+1] = i-1` for `i = 1..=k`, then the free
//!   placements are added to `active[1]` (each placement consumes one)
//! - `passive[0] = k+1`, `passive[k-i+1] = i+1`; the maxima equal the
//!   starting passive counts

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::hex::Hex;

/// Counts per size class, `k+1` entries.
pub type ClassCounts = SmallVec<[u32; 6]>;

/// One player's energy, score, element pools and planted units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub(crate) energy: u32,
    pub(crate) points: u32,
    pub(crate) prepare_left: u32,
    pub(crate) active: ClassCounts,
    pub(crate) passive: ClassCounts,
    pub(crate) max_passive: ClassCounts,
    pub(crate) planted: OrdSet<Hex>,
}

impl Inventory {
    /// Starting inventory for a board of radius `k`.
    ///
    /// ```
    /// use rust_psynth::core::{GameConfig, Inventory};
    ///
    /// let inv = Inventory::new(GameConfig::new(3).unwrap());
    /// assert_eq!(inv.prepare_left(), 2);
    /// assert_eq!(inv.active(), &[2, 4, 1, 0]);
    /// assert_eq!(inv.passive(), &[4, 4, 3, 2]);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let k = config.radius() as usize;
        let prepare_left = (2 * k as u32).div_ceil(3);

        let mut active: ClassCounts = SmallVec::from_elem(0, k + 1);
        let mut passive: ClassCounts = SmallVec::from_elem(0, k + 1);

        active[0] = k as u32 - 1;
        passive[0] = k as u32 + 1;
        for i in 1..=k {
            active[k - i + 1] = i as u32 - 1;
            passive[k - i + 1] = i as u32 + 1;
        }
        active[1] += prepare_left;

        Self {
            energy: 0,
            points: 0,
            prepare_left,
            active,
            max_passive: passive.clone(),
            passive,
            planted: OrdSet::new(),
        }
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Remaining free placements for the Prepare phase.
    #[must_use]
    pub fn prepare_left(&self) -> u32 {
        self.prepare_left
    }

    #[must_use]
    pub fn active(&self) -> &[u32] {
        &self.active
    }

    #[must_use]
    pub fn passive(&self) -> &[u32] {
        &self.passive
    }

    #[must_use]
    pub fn max_passive(&self) -> &[u32] {
        &self.max_passive
    }

    /// Cells holding this player's seeds and trees.
    #[must_use]
    pub fn planted(&self) -> &OrdSet<Hex> {
        &self.planted
    }

    #[must_use]
    pub fn has_passive(&self) -> bool {
        self.passive.iter().any(|&c| c > 0)
    }

    /// Energy to activate one passive element of `class`.
    ///
    /// `class + 1` while at least half the class maximum is still banked,
    /// `class + 2` once the class is mostly depleted.
    #[must_use]
    pub fn activation_cost(&self, class: usize) -> u32 {
        let passive = self.passive.get(class).copied().unwrap_or(0);
        let max = self.max_passive.get(class).copied().unwrap_or(0);
        if passive * 2 < max {
            class as u32 + 2
        } else {
            class as u32 + 1
        }
    }

    /// Return one passive element to `class` unless it is already full.
    pub(crate) fn restock_passive(&mut self, class: usize) {
        if let (Some(p), Some(&max)) = (self.passive.get_mut(class), self.max_passive.get(class)) {
            if *p < max {
                *p += 1;
            }
        }
    }
}

//! The hexagon grid.
//!
//! Cells live in a persistent `im::Vector` laid out column-major over the
//! `n×n` storage grid, so cloning a board for a snapshot or a rollout is
//! O(1) and writes copy only the touched chunk.
//!
//! ## Energy production
//!
//! A unit's production for a sun position is a ray cast of up to `k` steps
//! along `DIRECTIONS[sun]`:
//!
//! - leaving the grid or reaching an absent cell: the origin yields its size
//! - an empty cell: the ray continues
//! - a unit of size `≥ step`: fully shadowed, yields 0
//! - a smaller unit: the ray continues
//!
//! If all `k` steps pass, the origin yields its size.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::hex::{Hex, DIRECTIONS};
use super::player::PlayerColor;

/// A seed (size 0) or tree (size 1..=k).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub owner: PlayerColor,
    pub size: u8,
}

impl Unit {
    #[must_use]
    pub const fn new(owner: PlayerColor, size: u8) -> Self {
        Self { owner, size }
    }
}

/// Contents of one storage cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Outside the playable hexagon (or outside the grid).
    #[default]
    Absent,
    Empty,
    Occupied(Unit),
}

/// Grid of cells for a board of radius `k`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    radius: u8,
    cells: Vector<Cell>,
}

impl Board {
    /// An empty board for a validated config.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let radius = config.radius();
        let n = 2 * radius as i32 + 1;
        let cells = (0..n)
            .flat_map(|col| (0..n).map(move |row| Hex::new(col, row)))
            .map(|hex| {
                if hex.is_addressable(radius) {
                    Cell::Empty
                } else {
                    Cell::Absent
                }
            })
            .collect();
        Self { radius, cells }
    }

    #[must_use]
    pub fn radius(&self) -> u8 {
        self.radius
    }

    #[must_use]
    pub fn grid_len(&self) -> usize {
        2 * self.radius as usize + 1
    }

    #[must_use]
    pub fn center(&self) -> Hex {
        Hex::center(self.radius)
    }

    fn slot(&self, hex: Hex) -> Option<usize> {
        let n = self.grid_len() as i32;
        if (0..n).contains(&hex.col) && (0..n).contains(&hex.row) {
            Some((hex.col * n + hex.row) as usize)
        } else {
            None
        }
    }

    /// Cell at `hex`; anything outside the grid reads as `Absent`.
    #[must_use]
    pub fn cell(&self, hex: Hex) -> Cell {
        self.slot(hex)
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(Cell::Absent)
    }

    #[must_use]
    pub fn unit(&self, hex: Hex) -> Option<Unit> {
        match self.cell(hex) {
            Cell::Occupied(unit) => Some(unit),
            Cell::Absent | Cell::Empty => None,
        }
    }

    #[must_use]
    pub fn is_addressable(&self, hex: Hex) -> bool {
        !matches!(self.cell(hex), Cell::Absent)
    }

    /// Addressable and unoccupied.
    #[must_use]
    pub fn is_empty_cell(&self, hex: Hex) -> bool {
        matches!(self.cell(hex), Cell::Empty)
    }

    /// Place `unit` at `hex`. Writes outside the hexagon are ignored.
    pub(crate) fn place(&mut self, hex: Hex, unit: Unit) {
        if let Some(i) = self.slot(hex) {
            if self.cells[i] != Cell::Absent {
                self.cells.set(i, Cell::Occupied(unit));
            }
        }
    }

    /// Empty the cell at `hex`.
    pub(crate) fn clear(&mut self, hex: Hex) {
        if let Some(i) = self.slot(hex) {
            if self.cells[i] != Cell::Absent {
                self.cells.set(i, Cell::Empty);
            }
        }
    }

    /// A copy with `unit` placed at `hex`.
    #[must_use]
    pub fn with_unit(&self, hex: Hex, unit: Unit) -> Board {
        let mut board = self.clone();
        board.place(hex, unit);
        board
    }

    /// A copy with every unit set to `size`, keeping owners.
    #[must_use]
    pub fn with_all_units_at(&self, size: u8) -> Board {
        let mut board = self.clone();
        for (hex, unit) in self.units() {
            board.place(hex, Unit::new(unit.owner, size));
        }
        board
    }

    /// All addressable cells in storage order.
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        let n = self.grid_len() as i32;
        (0..n)
            .flat_map(move |col| (0..n).map(move |row| Hex::new(col, row)))
            .filter(move |&hex| self.is_addressable(hex))
    }

    /// Addressable cells at exactly `distance` from the center.
    pub fn ring(&self, distance: u32) -> impl Iterator<Item = Hex> + '_ {
        let center = self.center();
        self.hexes().filter(move |&hex| center.distance(hex) == distance)
    }

    /// All occupied cells in storage order.
    pub fn units(&self) -> impl Iterator<Item = (Hex, Unit)> + '_ {
        self.hexes().filter_map(move |hex| self.unit(hex).map(|u| (hex, u)))
    }

    /// Energy the unit at `origin` produces with the sun at `sun_pos`.
    ///
    /// Returns 0 for cells without a unit.
    #[must_use]
    pub fn produced_energy(&self, origin: Hex, sun_pos: u8) -> u32 {
        let Some(unit) = self.unit(origin) else {
            return 0;
        };
        let own_size = u32::from(unit.size);
        let direction = sun_pos as usize % DIRECTIONS.len();

        for step in 1..=i32::from(self.radius) {
            match self.cell(origin.offset(direction, step)) {
                Cell::Absent => return own_size,
                Cell::Empty => {}
                Cell::Occupied(other) => {
                    if i32::from(other.size) >= step {
                        return 0;
                    }
                }
            }
        }
        own_size
    }

    /// Production of `hexes` summed over all six sun positions.
    #[must_use]
    pub fn total_production<'a>(&self, hexes: impl IntoIterator<Item = &'a Hex>) -> u32 {
        hexes
            .into_iter()
            .map(|&hex| {
                (0..DIRECTIONS.len() as u8)
                    .map(|sun| self.produced_energy(hex, sun))
                    .sum::<u32>()
            })
            .sum()
    }
}

/// One row per storage row, three columns per cell: `.` empty, `r`/`b`
/// followed by the unit size, blank for absent cells. Columns are labeled.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.grid_len() as i32;
        write!(f, "   ")?;
        for col in 0..n {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..n {
            write!(f, "{row:>3}")?;
            for col in 0..n {
                match self.cell(Hex::new(col, row)) {
                    Cell::Absent => write!(f, "   ")?,
                    Cell::Empty => write!(f, "  .")?,
                    Cell::Occupied(unit) => {
                        let tag = match unit.owner {
                            PlayerColor::Red => 'r',
                            PlayerColor::Blue => 'b',
                        };
                        write!(f, " {tag}{}", unit.size)?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Player colors and per-color data storage.
//!
//! ## PlayerColor
//!
//! The game is strictly two-player: Red moves first, Blue closes every
//! round (sun rotation and sunshine happen after Blue's Grow).
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// Both colors in turn order.
    pub const ALL: [PlayerColor; 2] = [PlayerColor::Red, PlayerColor::Blue];

    /// Get the raw slot index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerColor::Red => 0,
            PlayerColor::Blue => 1,
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_psynth::core::{ColorMap, PlayerColor};
///
/// let mut energy: ColorMap<u32> = ColorMap::with_value(0);
/// energy[PlayerColor::Blue] += 3;
///
/// assert_eq!(energy[PlayerColor::Red], 0);
/// assert_eq!(energy[PlayerColor::Blue], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            data: [factory(PlayerColor::Red), factory(PlayerColor::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, color: PlayerColor) -> &T {
        &self.data[color.index()]
    }

    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (PlayerColor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for ColorMap<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}

//! Turn slots and per-side data storage.
//!
//! ## PlayerSlot
//!
//! The two turn slots. Which side a slot plays is unknown until the first
//! flip: whoever flips first is bound to the side of the revealed piece.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::Side;

/// Turn slot: the player who moves first, and the other one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    #[default]
    First,
    Second,
}

impl PlayerSlot {
    /// The slot that moves next.
    #[must_use]
    pub const fn next(self) -> PlayerSlot {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    /// 1-based player number, as shown to people.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerSlot::First => 1,
            PlayerSlot::Second => 2,
        }
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use banqi::core::{Side, SideMap};
///
/// let mut counts: SideMap<u32> = SideMap::with_default();
/// counts[Side::Red] += 3;
/// assert_eq!(counts[Side::Red], 3);
/// assert_eq!(counts[Side::Black], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Black), factory(Side::Red)],
        }
    }

    /// Create with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, Black first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

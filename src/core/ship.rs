//! Ship definitions and footprint computation.

use core::fmt;

use super::common::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Index of a ship in its grid's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(u8);

impl ShipId {
    pub(crate) fn new(index: usize) -> Self {
        ShipId(index as u8)
    }

    /// Position of the ship in placement order.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A fleet unit. Health starts at `length` and drops by one per hit.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    length: u8,
    orientation: Orientation,
    health: u8,
}

impl Ship {
    /// Create an undamaged ship. `length` must be at least one.
    pub fn new(length: u8, orientation: Orientation) -> Self {
        debug_assert!(length >= 1, "ship length must be at least 1");
        let length = length.max(1);
        Ship {
            length,
            orientation,
            health: length,
        }
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Register a hit. Returns `true` if this hit sank the ship.
    pub(crate) fn hit(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }

    /// Cells covered when the ship starts at `origin`, in order from the bow.
    /// Segments that would fall off the grid are yielded as `None`.
    pub fn footprint(&self, origin: Coordinate) -> impl Iterator<Item = Option<Coordinate>> {
        let orientation = self.orientation;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => origin.offset(i, 0),
            Orientation::Vertical => origin.offset(0, i),
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, orientation: {:?}, health: {} }}",
            self.length, self.orientation, self.health
        )
    }
}

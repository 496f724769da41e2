//! Common types: coordinates, phases, shot outcomes and engine errors.

use core::fmt;

use super::config::GRID_SIZE;

/// A validated position on the grid, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Validate a raw coordinate pair.
    pub fn new(x: i32, y: i32) -> Result<Self, EngineError> {
        if Self::in_bounds(x, y) {
            Ok(Coordinate {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(EngineError::InvalidCoordinate { x, y })
        }
    }

    /// Build a coordinate from indices already known to be on the grid.
    pub(crate) fn at(x: usize, y: usize) -> Self {
        debug_assert!(x < GRID_SIZE && y < GRID_SIZE);
        Coordinate {
            x: x as u8,
            y: y as u8,
        }
    }

    /// Returns `true` when `(x, y)` lies on the grid.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..GRID_SIZE as i32).contains(&x) && (0..GRID_SIZE as i32).contains(&y)
    }

    pub fn x(&self) -> usize {
        self.x as usize
    }

    pub fn y(&self) -> usize {
        self.y as usize
    }

    /// The coordinate `(dx, dy)` away, or `None` if it falls off the grid.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Coordinate> {
        Coordinate::new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }

    /// Edge-sharing neighbours that lie on the grid. Diagonals are not adjacent.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> {
        let here = *self;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| here.offset(dx, dy))
    }

    /// Returns `true` if `other` shares an edge with `self`.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Every coordinate on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE as u8).flat_map(|y| (0..GRID_SIZE as u8).map(move |x| Coordinate { x, y }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stage of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The human is placing the fleet.
    Placing,
    PlayerTurn,
    AiTurn,
    PlayerWon,
    AiWon,
}

impl Phase {
    /// Returns `true` once either side has won.
    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::PlayerWon | Phase::AiWon)
    }
}

/// Outcome of a shot as reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell had been shot before; nothing changed.
    AlreadyShot,
    Miss,
    Hit,
    /// The hit brought a ship's health to zero.
    HitAndSunk,
    /// The hit sank the last ship of the fleet.
    HitAndWon,
}

impl ShotOutcome {
    /// Returns `true` for every kind of hit.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Hit | ShotOutcome::HitAndSunk | ShotOutcome::HitAndWon
        )
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate lies outside the grid.
    InvalidCoordinate { x: i32, y: i32 },
    /// Operation not allowed in the current phase.
    InvalidPhase(Phase),
    /// Ship footprint is out of bounds, overlaps or touches another ship,
    /// or the grid already holds a full fleet.
    IllegalPlacement,
    /// Random placement and the fallback scan both failed.
    UnableToPlaceFleet,
    /// Ship id does not refer to a ship on this grid.
    UnknownShip,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCoordinate { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", x, y)
            }
            EngineError::InvalidPhase(phase) => {
                write!(f, "Operation not allowed during {:?}", phase)
            }
            EngineError::IllegalPlacement => write!(f, "Ship cannot be placed there"),
            EngineError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
            EngineError::UnknownShip => write!(f, "Ship id not found on this grid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

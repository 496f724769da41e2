//! Grid state: cells, the ship arena, placement validation and shot resolution.

use core::fmt;

use super::common::{Coordinate, EngineError};
use super::config::{GRID_SIZE, NUM_SHIPS};
use super::ship::{Ship, ShipId};

/// One square of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    coordinate: Coordinate,
    occupant: Option<ShipId>,
    was_shot: bool,
}

impl Cell {
    fn empty(coordinate: Coordinate) -> Self {
        Cell {
            coordinate,
            occupant: None,
            was_shot: false,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Ship occupying this cell, kept even after the ship sinks.
    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Once set this flag never clears.
    pub fn was_shot(&self) -> bool {
        self.was_shot
    }
}

/// Result of resolving a shot against a single grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The cell was shot before; nothing changed.
    AlreadyShot,
    Miss,
    /// A ship segment was hit; `sunk` is set on the hit that finished it.
    Hit { ship: ShipId, sunk: bool },
}

/// A 10×10 grid owning its cells and the ships placed on it.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    /// Indexed `[y][x]`.
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: [Option<Ship>; NUM_SHIPS],
    ship_count: usize,
    ships_remaining: usize,
}

impl Grid {
    /// Create an empty grid with no ships and no shots.
    pub fn new() -> Self {
        let cells = core::array::from_fn(|y| {
            core::array::from_fn(|x| Cell::empty(Coordinate::at(x, y)))
        });
        Grid {
            cells,
            ships: [None; NUM_SHIPS],
            ship_count: 0,
            ships_remaining: NUM_SHIPS,
        }
    }

    /// Cell at a validated coordinate.
    pub fn cell(&self, at: Coordinate) -> &Cell {
        &self.cells[at.y()][at.x()]
    }

    fn cell_mut(&mut self, at: Coordinate) -> &mut Cell {
        &mut self.cells[at.y()][at.x()]
    }

    /// Snapshot of the cell at raw coordinates.
    pub fn get_cell(&self, x: i32, y: i32) -> Result<Cell, EngineError> {
        Ok(*self.cell(Coordinate::new(x, y)?))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    /// Returns `true` if `ship` may start at `origin`: every segment on the
    /// grid, unoccupied, and not edge-adjacent to any occupied cell.
    pub fn can_place(&self, ship: &Ship, origin: Coordinate) -> bool {
        ship.footprint(origin).all(|target| match target {
            None => false,
            Some(at) => {
                !self.cell(at).is_occupied()
                    && at.neighbors().all(|n| !self.cell(n).is_occupied())
            }
        })
    }

    /// Place `ship` at `origin`, registering it in the arena.
    pub fn place(&mut self, ship: Ship, origin: Coordinate) -> Result<ShipId, EngineError> {
        if self.ship_count >= NUM_SHIPS || !self.can_place(&ship, origin) {
            return Err(EngineError::IllegalPlacement);
        }
        let id = ShipId::new(self.ship_count);
        for at in ship.footprint(origin).flatten() {
            self.cell_mut(at).occupant = Some(id);
        }
        self.ships[id.index()] = Some(ship);
        self.ship_count += 1;
        log::debug!(
            "placed ship {} (length {}, {:?}) at {}",
            id.index(),
            ship.length(),
            ship.orientation(),
            origin
        );
        Ok(id)
    }

    /// Fire at `at`, updating the cell, the ship it holds and the fleet count.
    pub fn shoot(&mut self, at: Coordinate) -> ShotResult {
        let cell = self.cell_mut(at);
        if cell.was_shot {
            return ShotResult::AlreadyShot;
        }
        cell.was_shot = true;
        let Some(id) = cell.occupant else {
            return ShotResult::Miss;
        };
        let sunk = match self.ships[id.index()].as_mut() {
            Some(ship) => ship.hit(),
            None => false,
        };
        if sunk {
            self.ships_remaining = self.ships_remaining.saturating_sub(1);
        }
        ShotResult::Hit { ship: id, sunk }
    }

    /// Ship registered under `id`.
    pub fn ship(&self, id: ShipId) -> Result<&Ship, EngineError> {
        self.ships
            .get(id.index())
            .and_then(|slot| slot.as_ref())
            .ok_or(EngineError::UnknownShip)
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (ShipId::new(i), s)))
    }

    /// Coordinates occupied by the ship `id`, in row-major order.
    pub fn ship_cells(&self, id: ShipId) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells()
            .filter(move |c| c.occupant == Some(id))
            .map(|c| c.coordinate)
    }

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// Fleet size minus ships sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Returns `true` when every ship of the fleet has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships_remaining == 0
    }

    /// Cells that have not been shot yet, in row-major order.
    pub fn unshot_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells().filter(|c| !c.was_shot).map(|c| c.coordinate)
    }

    /// Number of cells shot so far.
    pub fn shots_taken(&self) -> usize {
        self.cells().filter(|c| c.was_shot).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ ships: {}, remaining: {} }}",
            self.ship_count, self.ships_remaining
        )?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match (cell.was_shot, cell.is_occupied()) {
                    (true, true) => 'X',
                    (true, false) => 'o',
                    (false, true) => 'S',
                    (false, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

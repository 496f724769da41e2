/// Width and height of every grid.
pub const GRID_SIZE: usize = 10;

/// Number of ships in a fleet.
pub const NUM_SHIPS: usize = 5;

/// Ship lengths in placement order: the Nth ship placed has length `6 - N`.
pub const FLEET: [u8; NUM_SHIPS] = [5, 4, 3, 2, 1];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2 + 1;

/// Random samples tried before the AI falls back to a row-major scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// Length of the ship placed at position `index` of the fleet sequence.
pub fn fleet_length(index: usize) -> Option<u8> {
    FLEET.get(index).copied()
}

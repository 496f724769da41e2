// Uniform-random placement and targeting for the computer opponent.
// Sampling is capped; past the cap a row-major scan guarantees termination.

use crate::core::{
    common::{Coordinate, EngineError},
    config::{GRID_SIZE, MAX_RANDOM_ATTEMPTS},
    grid::Grid,
    ship::{Orientation, Ship},
};
use rand::Rng;

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::at(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
}

fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random_bool(0.5) {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Pick a legal origin and orientation for a ship of `length` on `grid`.
///
/// Samples a uniform coordinate and a fair-coin orientation until the ship
/// fits. After [`MAX_RANDOM_ATTEMPTS`] samples every origin is scanned in
/// row-major order, horizontal first.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
    length: u8,
) -> Result<(Coordinate, Orientation), EngineError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let origin = random_coordinate(rng);
        let orientation = random_orientation(rng);
        if grid.can_place(&Ship::new(length, orientation), origin) {
            return Ok((origin, orientation));
        }
    }
    log::warn!(
        "random placement of length {} gave up after {} attempts, scanning",
        length,
        MAX_RANDOM_ATTEMPTS
    );
    Coordinate::all()
        .flat_map(|origin| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .map(move |orientation| (origin, orientation))
        })
        .find(|(origin, orientation)| grid.can_place(&Ship::new(length, *orientation), *origin))
        .ok_or(EngineError::UnableToPlaceFleet)
}

/// Place one ship per entry of `lengths`, in order, at random legal positions.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    lengths: &[u8],
) -> Result<(), EngineError> {
    for &length in lengths {
        let (origin, orientation) = random_placement(rng, grid, length)?;
        grid.place(Ship::new(length, orientation), origin)?;
    }
    Ok(())
}

/// Pick a cell of `grid` that has not been shot.
///
/// Resamples while the drawn cell was already shot; after
/// [`MAX_RANDOM_ATTEMPTS`] draws the first unshot cell in row-major order is
/// taken. Returns `None` only when every cell has been shot.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Coordinate> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let target = random_coordinate(rng);
        if !grid.cell(target).was_shot() {
            return Some(target);
        }
    }
    log::warn!(
        "random targeting gave up after {} attempts, scanning",
        MAX_RANDOM_ATTEMPTS
    );
    grid.unshot_cells().next()
}

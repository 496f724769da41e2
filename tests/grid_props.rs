use fleet_engine::{place_fleet, Coordinate, Grid, Orientation, Ship, ShotResult, FLEET, NUM_SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_fleet(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    place_fleet(&mut rng, &mut grid, &FLEET).unwrap();
    grid
}

fn assert_no_touching(grid: &Grid) -> Result<(), TestCaseError> {
    for cell in grid.cells() {
        let Some(id) = cell.occupant() else { continue };
        for n in cell.coordinate().neighbors() {
            if let Some(other) = grid.cell(n).occupant() {
                prop_assert_eq!(other, id, "ships touch at {} / {}", cell.coordinate(), n);
            }
        }
    }
    Ok(())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_complete_and_separated(seed in any::<u64>()) {
        let grid = random_fleet(seed);
        prop_assert_eq!(grid.ship_count(), NUM_SHIPS);
        let lengths: Vec<u8> = grid.ships().map(|(_, s)| s.length()).collect();
        prop_assert_eq!(lengths, FLEET.to_vec());
        for (id, ship) in grid.ships() {
            prop_assert_eq!(grid.ship_cells(id).count(), ship.length() as usize);
        }
        assert_no_touching(&grid)?;
    }

    #[test]
    fn arbitrary_placements_never_touch(
        attempts in prop::collection::vec((0..10i32, 0..10i32, 1..=5u8, orientation()), 0..40)
    ) {
        let mut grid = Grid::new();
        for (x, y, length, orientation) in attempts {
            let ship = Ship::new(length, orientation);
            let origin = Coordinate::new(x, y).unwrap();
            let legal = grid.can_place(&ship, origin);
            let before = grid.ship_count();
            let placed = grid.place(ship, origin).is_ok();
            prop_assert_eq!(placed, legal && before < NUM_SHIPS);
            assert_no_touching(&grid)?;
        }
    }

    #[test]
    fn shots_are_idempotent(seed in any::<u64>(), x in 0..10i32, y in 0..10i32) {
        let mut grid = random_fleet(seed);
        let target = Coordinate::new(x, y).unwrap();
        let first = grid.shoot(target);
        prop_assert_ne!(first, ShotResult::AlreadyShot);
        let after_first = grid.clone();
        prop_assert_eq!(grid.shoot(target), ShotResult::AlreadyShot);
        prop_assert_eq!(&grid, &after_first);
    }

    #[test]
    fn health_drops_once_per_distinct_hit(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10i32, 0..10i32), 0..200)
    ) {
        let mut grid = random_fleet(seed);
        for (x, y) in shots {
            let target = Coordinate::new(x, y).unwrap();
            let before: Vec<u8> = grid.ships().map(|(_, s)| s.health()).collect();
            let was_shot = grid.cell(target).was_shot();
            let result = grid.shoot(target);
            let after: Vec<u8> = grid.ships().map(|(_, s)| s.health()).collect();
            for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
                prop_assert!(a <= b);
                let expected_drop = match result {
                    ShotResult::Hit { ship, .. } if ship.index() == i => 1,
                    _ => 0,
                };
                prop_assert_eq!(b - a, expected_drop);
            }
            if was_shot {
                prop_assert_eq!(result, ShotResult::AlreadyShot);
            }
            prop_assert!(grid.cell(target).was_shot());
        }
    }

    #[test]
    fn fleet_destroyed_iff_every_ship_cell_shot(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10i32, 0..10i32), 0..300)
    ) {
        let mut grid = random_fleet(seed);
        for (x, y) in shots {
            grid.shoot(Coordinate::new(x, y).unwrap());
            let all_hit = grid.cells().filter(|c| c.is_occupied()).all(|c| c.was_shot());
            prop_assert_eq!(grid.ships_remaining() == 0, all_hit);
            let sunk = grid.ships().filter(|(_, s)| s.is_sunk()).count();
            prop_assert_eq!(grid.ships_remaining(), NUM_SHIPS - sunk);
        }
    }
}

#[test]
fn sweeping_the_grid_destroys_the_fleet() {
    let mut grid = random_fleet(99);
    let mut sinks = 0;
    for target in Coordinate::all() {
        if let ShotResult::Hit { sunk: true, .. } = grid.shoot(target) {
            sinks += 1;
        }
    }
    assert_eq!(sinks, NUM_SHIPS);
    assert!(grid.all_sunk());
    assert_eq!(grid.shots_taken(), 100);
}

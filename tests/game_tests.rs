use fleet_engine::{
    Coordinate, EngineError, GameEngine, Orientation, Phase, Placement, ShotOutcome, Side,
    NUM_SHIPS,
};

/// Place the human fleet in rows 0, 2, 4, 6 and 8, starting at column 0.
fn placed_engine(seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(seed);
    for row in 0..NUM_SHIPS as i32 {
        assert_eq!(
            engine.request_placement(0, row * 2, Orientation::Horizontal),
            Ok(Placement::Accepted)
        );
    }
    engine
}

fn opponent_cells(engine: &GameEngine, occupied: bool) -> Vec<Coordinate> {
    engine
        .opponent_grid()
        .cells()
        .filter(|c| c.is_occupied() == occupied)
        .map(|c| c.coordinate())
        .collect()
}

#[test]
fn test_placement_sequence_and_ai_fleet() {
    let mut engine = GameEngine::new(1);
    assert_eq!(engine.phase(), Phase::Placing);

    let mut expected = vec![5u8, 4, 3, 2, 1].into_iter();
    for row in 0..NUM_SHIPS as i32 {
        assert_eq!(engine.next_ship_length(), expected.next());
        assert_eq!(engine.opponent_grid().ship_count(), 0);
        engine
            .request_placement(0, row * 2, Orientation::Horizontal)
            .unwrap();
        assert_eq!(engine.ships_placed(), row as usize + 1);
    }

    assert_eq!(engine.phase(), Phase::PlayerTurn);
    assert_eq!(engine.next_ship_length(), None);
    assert_eq!(engine.opponent_grid().ship_count(), NUM_SHIPS);
    let lengths: Vec<u8> = engine.opponent_grid().ships().map(|(_, s)| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 2, 1]);
    assert_eq!(
        engine.request_placement(9, 9, Orientation::Vertical),
        Err(EngineError::InvalidPhase(Phase::PlayerTurn))
    );
}

#[test]
fn test_rejected_placement_keeps_ship_length() {
    let mut engine = GameEngine::new(2);
    engine.request_placement(0, 0, Orientation::Vertical).unwrap();
    assert_eq!(
        engine.request_placement(1, 2, Orientation::Horizontal),
        Ok(Placement::Rejected)
    );
    assert_eq!(
        engine.request_placement(1, 2, Orientation::Vertical),
        Ok(Placement::Rejected)
    );
    assert_eq!(
        engine.request_placement(7, 0, Orientation::Horizontal),
        Ok(Placement::Rejected)
    );
    assert_eq!(engine.ships_placed(), 1);
    assert_eq!(engine.next_ship_length(), Some(4));
    assert_eq!(engine.phase(), Phase::Placing);
}

#[test]
fn test_out_of_range_requests() {
    let mut engine = GameEngine::new(3);
    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MIN, i32::MAX)] {
        assert_eq!(
            engine.request_placement(x, y, Orientation::Vertical),
            Err(EngineError::InvalidCoordinate { x, y })
        );
        assert_eq!(
            engine.cell(Side::Player, x, y),
            Err(EngineError::InvalidCoordinate { x, y })
        );
    }
    assert_eq!(engine.ships_placed(), 0);

    let mut engine = placed_engine(3);
    for (x, y) in [(-1, 5), (5, 10)] {
        assert_eq!(
            engine.request_shot(x, y),
            Err(EngineError::InvalidCoordinate { x, y })
        );
    }
    assert_eq!(engine.phase(), Phase::PlayerTurn);
}

#[test]
fn test_shot_rejected_while_placing() {
    let mut engine = GameEngine::new(4);
    assert_eq!(
        engine.request_shot(0, 0),
        Err(EngineError::InvalidPhase(Phase::Placing))
    );
    // phase is checked before the coordinate
    assert_eq!(
        engine.request_shot(-1, 20),
        Err(EngineError::InvalidPhase(Phase::Placing))
    );
}

#[test]
fn test_hit_keeps_turn_and_repeat_is_noop() {
    let mut engine = placed_engine(5);
    let target = opponent_cells(&engine, true)[0];
    let (x, y) = (target.x() as i32, target.y() as i32);

    let report = engine.request_shot(x, y).unwrap();
    assert!(report.outcome.is_hit());
    assert!(report.ai_volley.is_empty());
    assert_eq!(engine.phase(), Phase::PlayerTurn);

    let before = engine.state();
    let report = engine.request_shot(x, y).unwrap();
    assert_eq!(report.outcome, ShotOutcome::AlreadyShot);
    assert!(report.ai_volley.is_empty());
    assert_eq!(engine.state(), before);
}

#[test]
fn test_miss_hands_turn_to_ai_until_it_misses() {
    let mut engine = placed_engine(6);
    let target = opponent_cells(&engine, false)[0];
    let report = engine
        .request_shot(target.x() as i32, target.y() as i32)
        .unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(engine.opponent_grid().ships_remaining(), NUM_SHIPS);

    let volley = &report.ai_volley;
    assert!(!volley.is_empty());
    let (last, earlier) = volley.split_last().unwrap();
    assert!(earlier.iter().all(|s| s.outcome.is_hit()));
    match last.outcome {
        ShotOutcome::Miss => assert_eq!(engine.phase(), Phase::PlayerTurn),
        ShotOutcome::HitAndWon => assert_eq!(engine.phase(), Phase::AiWon),
        other => panic!("volley ended on {:?}", other),
    }
    for shot in volley {
        assert!(engine.player_grid().cell(shot.target).was_shot());
    }
    assert_eq!(engine.player_grid().shots_taken(), volley.len());
}

#[test]
fn test_sinking_last_ship_wins() {
    let mut engine = placed_engine(7);
    let targets = opponent_cells(&engine, true);
    let (last, rest) = targets.split_last().unwrap();

    let mut sunk = 0;
    for t in rest {
        let report = engine.request_shot(t.x() as i32, t.y() as i32).unwrap();
        match report.outcome {
            ShotOutcome::Hit => {}
            ShotOutcome::HitAndSunk => sunk += 1,
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(engine.phase(), Phase::PlayerTurn);
    }
    assert_eq!(sunk, NUM_SHIPS - 1);
    assert_eq!(engine.ships_remaining(Side::Ai), 1);

    let report = engine.request_shot(last.x() as i32, last.y() as i32).unwrap();
    assert_eq!(report.outcome, ShotOutcome::HitAndWon);
    assert_eq!(engine.phase(), Phase::PlayerWon);
    assert_eq!(engine.ships_remaining(Side::Ai), 0);
    assert_eq!(engine.player_grid().shots_taken(), 0);

    assert_eq!(
        engine.request_shot(0, 0),
        Err(EngineError::InvalidPhase(Phase::PlayerWon))
    );
    assert_eq!(
        engine.request_placement(0, 0, Orientation::Vertical),
        Err(EngineError::InvalidPhase(Phase::PlayerWon))
    );
}

#[test]
fn test_ai_can_win_and_game_stops() {
    let mut engine = placed_engine(8);
    let misses = opponent_cells(&engine, false);
    for t in misses {
        if engine.phase() != Phase::PlayerTurn {
            break;
        }
        engine.request_shot(t.x() as i32, t.y() as i32).unwrap();
    }
    // Every volley ends on one of the 85 empty player cells, so the AI wins
    // before the player runs out of misses.
    assert_eq!(engine.phase(), Phase::AiWon);
    assert_eq!(engine.ships_remaining(Side::Player), 0);
    assert!(engine
        .player_grid()
        .cells()
        .filter(|c| c.is_occupied())
        .all(|c| c.was_shot()));
    assert_eq!(
        engine.request_shot(0, 0),
        Err(EngineError::InvalidPhase(Phase::AiWon))
    );
}

#[test]
fn test_cell_snapshots() {
    let engine = placed_engine(9);
    let cell = engine.cell(Side::Player, 2, 0).unwrap();
    assert!(cell.is_occupied());
    assert!(!cell.was_shot());
    assert!(!engine.cell(Side::Player, 2, 1).unwrap().is_occupied());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = placed_engine(42);
    let mut b = placed_engine(42);
    assert_eq!(a.state(), b.state());
    for t in opponent_cells(&a, false).into_iter().take(10) {
        if a.phase() != Phase::PlayerTurn {
            break;
        }
        let ra = a.request_shot(t.x() as i32, t.y() as i32).unwrap();
        let rb = b.request_shot(t.x() as i32, t.y() as i32).unwrap();
        assert_eq!(ra, rb);
    }
    assert_eq!(a.state(), b.state());
}

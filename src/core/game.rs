//! Turn controller: fleet placement order, shot exchange and game phases.

use alloc::vec::Vec;

use crate::core::{
    ai,
    common::{Coordinate, EngineError, Phase, ShotOutcome},
    config::{fleet_length, FLEET, NUM_SHIPS},
    grid::{Cell, Grid, ShotResult},
    ship::{Orientation, Ship},
};
use rand::{rngs::SmallRng, SeedableRng};

/// Which grid an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human's own grid, fired on by the AI.
    Player,
    /// The AI's grid, fired on by the human.
    Ai,
}

/// Answer to a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    Accepted,
    Rejected,
}

/// A single shot fired by the AI against the player's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiShot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Result of a player shot plus the AI volley it triggered, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    /// AI shots in firing order; empty unless the player missed.
    pub ai_volley: Vec<AiShot>,
}

/// Snapshot of both grids and the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub player_grid: Grid,
    pub opponent_grid: Grid,
    pub phase: Phase,
}

/// Turn controller for a human-vs-AI game.
///
/// The human places a fleet ship by ship, after which the AI places its own
/// and the players alternate shots. A hit earns another shot; a miss hands
/// the turn over. The AI's turn runs to completion inside the call that
/// handed it control.
pub struct GameEngine {
    player_grid: Grid,
    opponent_grid: Grid,
    phase: Phase,
    rng: SmallRng,
}

/// Collapse a grid-level shot result into the outcome reported to the UI.
fn resolve(grid: &mut Grid, at: Coordinate) -> ShotOutcome {
    match grid.shoot(at) {
        ShotResult::AlreadyShot => ShotOutcome::AlreadyShot,
        ShotResult::Miss => ShotOutcome::Miss,
        ShotResult::Hit { sunk: true, .. } if grid.all_sunk() => ShotOutcome::HitAndWon,
        ShotResult::Hit { sunk: true, .. } => ShotOutcome::HitAndSunk,
        ShotResult::Hit { sunk: false, .. } => ShotOutcome::Hit,
    }
}

impl GameEngine {
    /// New game in the placing phase with a seeded AI.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// New game in the placing phase driven by `rng`.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            player_grid: Grid::new(),
            opponent_grid: Grid::new(),
            phase: Phase::Placing,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human's grid, ships visible.
    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// The AI's grid.
    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Player => &self.player_grid,
            Side::Ai => &self.opponent_grid,
        }
    }

    /// Snapshot of the cell at `(x, y)` on `side`'s grid.
    pub fn cell(&self, side: Side, x: i32, y: i32) -> Result<Cell, EngineError> {
        self.grid(side).get_cell(x, y)
    }

    /// Ships of `side` not yet sunk.
    pub fn ships_remaining(&self, side: Side) -> usize {
        self.grid(side).ships_remaining()
    }

    /// Ships the human has placed so far.
    pub fn ships_placed(&self) -> usize {
        self.player_grid.ship_count()
    }

    /// Length of the next ship the human must place, if any remain.
    pub fn next_ship_length(&self) -> Option<u8> {
        match self.phase {
            Phase::Placing => fleet_length(self.ships_placed()),
            _ => None,
        }
    }

    /// Try to place the next ship of the human's fleet with its bow at `(x, y)`.
    ///
    /// An illegal footprint is `Rejected` and leaves the grid untouched. The
    /// fifth accepted placement makes the AI place its own fleet and starts
    /// the player's turn.
    pub fn request_placement(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<Placement, EngineError> {
        let length = self
            .next_ship_length()
            .ok_or(EngineError::InvalidPhase(self.phase))?;
        let origin = Coordinate::new(x, y)?;
        let ship = Ship::new(length, orientation);
        if !self.player_grid.can_place(&ship, origin) {
            log::debug!("rejected length {} {:?} at {}", length, orientation, origin);
            return Ok(Placement::Rejected);
        }
        self.commit_placement(ship, origin, &FLEET)?;
        Ok(Placement::Accepted)
    }

    /// Place a validated human ship. The last one first lays out the AI
    /// fleet, so a failure there leaves the human grid untouched.
    fn commit_placement(
        &mut self,
        ship: Ship,
        origin: Coordinate,
        ai_fleet: &[u8],
    ) -> Result<(), EngineError> {
        let opponent = if self.ships_placed() + 1 == NUM_SHIPS {
            let mut opponent = Grid::new();
            ai::place_fleet(&mut self.rng, &mut opponent, ai_fleet)?;
            Some(opponent)
        } else {
            None
        };
        self.player_grid.place(ship, origin)?;
        if let Some(opponent) = opponent {
            self.opponent_grid = opponent;
            self.set_phase(Phase::PlayerTurn);
        }
        Ok(())
    }

    /// Fire at `(x, y)` on the AI's grid.
    ///
    /// A miss passes the turn to the AI, which keeps firing until it misses
    /// or sinks the last of the human's ships; those shots are returned in
    /// [`ShotReport::ai_volley`].
    pub fn request_shot(&mut self, x: i32, y: i32) -> Result<ShotReport, EngineError> {
        if self.phase != Phase::PlayerTurn {
            return Err(EngineError::InvalidPhase(self.phase));
        }
        let target = Coordinate::new(x, y)?;
        let outcome = resolve(&mut self.opponent_grid, target);
        log::debug!("player fired at {}: {:?}", target, outcome);
        let mut ai_volley = Vec::new();
        match outcome {
            ShotOutcome::HitAndWon => self.set_phase(Phase::PlayerWon),
            ShotOutcome::Miss => {
                self.set_phase(Phase::AiTurn);
                self.run_ai_turn(&mut ai_volley);
            }
            ShotOutcome::AlreadyShot | ShotOutcome::Hit | ShotOutcome::HitAndSunk => {}
        }
        Ok(ShotReport { outcome, ai_volley })
    }

    fn run_ai_turn(&mut self, volley: &mut Vec<AiShot>) {
        while self.phase == Phase::AiTurn {
            let Some(target) = ai::random_target(&mut self.rng, &self.player_grid) else {
                // Nothing left to shoot; hand the turn back.
                self.set_phase(Phase::PlayerTurn);
                break;
            };
            let outcome = resolve(&mut self.player_grid, target);
            log::debug!("ai fired at {}: {:?}", target, outcome);
            volley.push(AiShot { target, outcome });
            match outcome {
                ShotOutcome::Miss => self.set_phase(Phase::PlayerTurn),
                ShotOutcome::HitAndWon => self.set_phase(Phase::AiWon),
                ShotOutcome::AlreadyShot | ShotOutcome::Hit | ShotOutcome::HitAndSunk => {}
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Serializable snapshot of the current game.
    pub fn state(&self) -> GameState {
        GameState {
            player_grid: self.player_grid.clone(),
            opponent_grid: self.opponent_grid.clone(),
            phase: self.phase,
        }
    }
}

//! Command-line front end: drives a [`GameEngine`] with any [`Player`].
//!
//! This module provides:
//! - Interface display and input parsing helpers
//! - The placement and firing loops shared by `play` and `auto`

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use crate::core::{GameEngine, Phase, Placement, Side};
use crate::player::Player;
use rand::rngs::SmallRng;

/// Final tally of a game, printed as JSON by `auto`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSummary {
    pub winner: Option<Side>,
    pub phase: Phase,
    /// Cells of the AI grid the human side has shot.
    pub player_shots: usize,
    /// Cells of the human grid the AI has shot.
    pub ai_shots: usize,
    pub player_ships_remaining: usize,
    pub ai_ships_remaining: usize,
}

impl GameSummary {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let winner = match engine.phase() {
            Phase::PlayerWon => Some(Side::Player),
            Phase::AiWon => Some(Side::Ai),
            _ => None,
        };
        Self {
            winner,
            phase: engine.phase(),
            player_shots: engine.opponent_grid().shots_taken(),
            ai_shots: engine.player_grid().shots_taken(),
            player_ships_remaining: engine.ships_remaining(Side::Player),
            ai_ships_remaining: engine.ships_remaining(Side::Ai),
        }
    }
}

/// Place the human fleet one ship at a time using `player`'s choices.
pub fn place_fleet(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    rng: &mut SmallRng,
    verbose: bool,
) -> anyhow::Result<()> {
    while let Some(length) = engine.next_ship_length() {
        let (origin, orientation) = player.choose_placement(rng, engine.player_grid(), length)?;
        match engine.request_placement(origin.x() as i32, origin.y() as i32, orientation)? {
            Placement::Accepted => {}
            Placement::Rejected if verbose => std::println!(
                "A ship of length {} cannot go at {} {:?}: out of bounds or touching another ship",
                length,
                coord_to_string(origin),
                orientation
            ),
            Placement::Rejected => {}
        }
    }
    Ok(())
}

/// Fire until the game ends or `player` has no more targets.
pub fn fire_until_done(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    rng: &mut SmallRng,
    verbose: bool,
) -> anyhow::Result<()> {
    while engine.phase() == Phase::PlayerTurn {
        if verbose {
            print_player_view(engine);
        }
        let Some(target) = player.select_target(rng, engine.opponent_grid()) else {
            log::info!("no target selected, stopping");
            break;
        };
        let report = engine.request_shot(target.x() as i32, target.y() as i32)?;
        player.handle_shot_result(target, report.outcome);
        if verbose {
            print_volley(&report.ai_volley);
        }
    }
    Ok(())
}

/// Play a whole game and return its summary.
pub fn run_game(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    rng: &mut SmallRng,
    verbose: bool,
) -> anyhow::Result<GameSummary> {
    place_fleet(engine, player, rng, verbose)?;
    fire_until_done(engine, player, rng, verbose)?;
    Ok(GameSummary::from_engine(engine))
}

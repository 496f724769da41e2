//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Coordinate, EngineError, GameEngine, Orientation, Phase, Placement, Player,
    ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{cli::run_game, CliPlayer};

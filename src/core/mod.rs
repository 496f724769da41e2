//! Core fleet engine (no_std compatible)
//!
//! Grid model, placement rules, shot resolution, the turn controller and the
//! random AI. Needs only `alloc` (for the AI volley list), `rand` and `log`.

pub mod ai;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod ship;

// Re-export commonly used types
pub use ai::{place_fleet, random_placement, random_target};
pub use common::{Coordinate, EngineError, Phase, ShotOutcome};
pub use config::*;
pub use game::{AiShot, GameEngine, GameState, Placement, ShotReport, Side};
pub use grid::{Cell, Grid, ShotResult};
pub use ship::{Orientation, Ship, ShipId};

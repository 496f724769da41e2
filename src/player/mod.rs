//! Player trait and implementations
//!
//! A [`Player`] decides where ships go and where to shoot. The engine's own
//! opponent uses the same random strategy as [`AiPlayer`]; front ends use the
//! trait to drive the human side automatically.

use crate::core::{Coordinate, EngineError, Grid, Orientation, ShotOutcome};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose an origin and orientation for a ship of `length` on `grid`.
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        grid: &Grid,
        length: u8,
    ) -> Result<(Coordinate, Orientation), EngineError>;

    /// Choose the next cell to fire at on the opponent's `grid`, or `None`
    /// when nothing is left to shoot.
    fn select_target(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

use crate::core::{ai, Coordinate, EngineError, Grid, Orientation};
use rand::rngs::SmallRng;

use super::Player;

/// Memory-less AI: uniform random legal placement and uniform random
/// targeting of cells not yet shot.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        grid: &Grid,
        length: u8,
    ) -> Result<(Coordinate, Orientation), EngineError> {
        ai::random_placement(rng, grid, length)
    }

    fn select_target(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Coordinate> {
        ai::random_target(rng, grid)
    }
}

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::cli::interface::{coord_to_string, describe, parse_coord, parse_placement, render_grid};
use crate::core::{ai, Coordinate, EngineError, Grid, Orientation, ShotOutcome};
use rand::rngs::SmallRng;

use super::Player;

/// Interactive player reading commands from a line-based input.
///
/// Placement lines look like `A1 V` or `A1 H`; an empty line places the ship
/// randomly. Shot lines look like `B7`; an empty line fires at a random
/// unshot cell. End of input places randomly, or stops shooting.
pub struct CliPlayer<R> {
    input: R,
}

impl CliPlayer<io::StdinLock<'static>> {
    /// Player reading from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next input line, trimmed. `None` at end of input or on a read error.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        std::print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().into()),
            Err(e) => {
                log::warn!("failed to read input: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        grid: &Grid,
        length: u8,
    ) -> Result<(Coordinate, Orientation), EngineError> {
        loop {
            std::print!("{}", render_grid(grid, true));
            let prompt = std::format!("Place ship of length {} (e.g. A1 V, A1 H, enter for random): ", length);
            let Some(line) = self.read_line(&prompt) else {
                return ai::random_placement(rng, grid, length);
            };
            if line.is_empty() {
                return ai::random_placement(rng, grid, length);
            }
            match parse_placement(&line) {
                Some((x, y, orientation)) => match Coordinate::new(x, y) {
                    Ok(origin) => return Ok((origin, orientation)),
                    Err(e) => std::println!("Error: {}", e),
                },
                None => std::println!("Invalid input"),
            }
        }
    }

    fn select_target(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Coordinate> {
        loop {
            let line = self.read_line("Enter target (e.g. B7, enter for random): ")?;
            if line.is_empty() {
                return ai::random_target(rng, grid);
            }
            match parse_coord(&line).map(|(x, y)| Coordinate::new(x, y)) {
                Some(Ok(target)) => return Some(target),
                Some(Err(e)) => std::println!("Error: {}", e),
                None => std::println!("Invalid coordinate"),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        std::println!("You fired at {} -> {}", coord_to_string(target), describe(outcome));
    }
}

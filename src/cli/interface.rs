#![cfg(feature = "std")]

//! Text rendering of grids and parsing of typed coordinates.

use std::fmt::Write as _;
use std::string::String;

use crate::core::{
    AiShot, Cell, Coordinate, GameEngine, Grid, Orientation, ShotOutcome, GRID_SIZE,
};

/// Format a coordinate as column letter plus 1-based row, e.g. `B7`.
pub fn coord_to_string(at: Coordinate) -> String {
    let col = (b'A' + at.x() as u8) as char;
    std::format!("{}{}", col, at.y() + 1)
}

/// Parse `B7`-style input into raw `(x, y)`. The result is not range
/// checked; the engine reports off-grid values.
pub fn parse_coord(input: &str) -> Option<(i32, i32)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = col_ch as i32 - 'A' as i32;
    let row: i32 = chars.as_str().parse().ok()?;
    Some((col, row.checked_sub(1)?))
}

/// Parse `A1 V` / `A1 H` placement input. Orientation defaults to vertical.
pub fn parse_placement(input: &str) -> Option<(i32, i32, Orientation)> {
    let mut parts = input.split_whitespace();
    let (x, y) = parse_coord(parts.next()?)?;
    let orientation = match parts.next().and_then(|p| p.chars().next()) {
        None | Some('v') | Some('V') => Orientation::Vertical,
        Some('h') | Some('H') => Orientation::Horizontal,
        Some(_) => return None,
    };
    Some((x, y, orientation))
}

fn cell_char(cell: &Cell, reveal: bool) -> char {
    match (cell.was_shot(), cell.is_occupied()) {
        (true, true) => 'X',
        (true, false) => 'o',
        (false, true) if reveal => 'S',
        _ => '.',
    }
}

/// Render a grid with column letters and row numbers. Unshot ships are only
/// drawn when `reveal` is set.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in grid.cells().collect::<std::vec::Vec<_>>().chunks(GRID_SIZE).enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for cell in row {
            let _ = write!(out, " {}", cell_char(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// Human-readable description of a shot outcome.
pub fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::AlreadyShot => "already shot",
        ShotOutcome::Miss => "miss",
        ShotOutcome::Hit => "hit",
        ShotOutcome::HitAndSunk => "hit and sunk",
        ShotOutcome::HitAndWon => "hit, fleet destroyed",
    }
}

/// Print every shot of an AI volley.
pub fn print_volley(volley: &[AiShot]) {
    for shot in volley {
        std::println!(
            "Opponent fired at {} -> {}",
            coord_to_string(shot.target),
            describe(shot.outcome)
        );
    }
}

/// Display the opponent grid (top) and the player's grid (bottom).
pub fn print_player_view(engine: &GameEngine) {
    std::println!("Opponent board ({} ships left):", engine.opponent_grid().ships_remaining());
    std::print!("{}", render_grid(engine.opponent_grid(), false));
    std::println!("\nYour board ({} ships left):", engine.player_grid().ships_remaining());
    std::print!("{}", render_grid(engine.player_grid(), true));
}

//! Food placement by bounded rejection sampling.

use super::grid::{Cell, GridSize};
use crate::constants::MAX_PLACEMENT_ATTEMPTS;
use rand::Rng;

/// Pick a uniformly random free cell, or `None` if every one of
/// `MAX_PLACEMENT_ATTEMPTS` draws landed on an occupied cell.
///
/// There is deliberately no fallback scan for free cells: on a nearly full
/// board the caller simply ends up with fewer food items for a while.
pub fn place_food<R, F>(rng: &mut R, grid: GridSize, is_occupied: F) -> Option<Cell>
where
    R: Rng + ?Sized,
    F: Fn(Cell) -> bool,
{
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(1..=grid.rows),
            rng.gen_range(1..=grid.cols),
        );
        if !is_occupied(cell) {
            return Some(cell);
        }
    }
    None
}

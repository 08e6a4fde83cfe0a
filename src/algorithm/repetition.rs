//! Corner color assignment and repetition reduction
//!
//! Corner tilesets fix every corner color before any tile is placed. The
//! corner at grid cell `(row, col)` has type `(col - row + 1) & 3`.

use crate::algorithm::weighting::Weighting;
use crate::math::probability::{change_color, weighted_index};
use crate::spatial::grid::{ColorGrid, Layer};
use rand::Rng;

/// Corner type of the grid cell at `(row, col)`
pub const fn corner_type(row: usize, col: usize) -> usize {
    (col.wrapping_sub(row).wrapping_add(1)) & 3
}

// Weights of a corner type, only when they can make a difference
fn active_weights<'w>(
    weighting: Option<&'w Weighting>,
    slot: usize,
    count: usize,
) -> Option<&'w [u32]> {
    weighting
        .and_then(|weighting| weighting.slot(slot))
        .filter(|_| count > 1)
}

/// Give every cell of the corner layer a random color of its corner type
pub fn assign_corner_colors<R>(
    grid: &mut ColorGrid,
    rng: &mut R,
    num_color: &[usize; 6],
    weighting: Option<&Weighting>,
) where
    R: Rng + ?Sized,
{
    let (rows, cols) = grid.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            let slot = corner_type(row, col);
            let count = num_color.get(slot).copied().unwrap_or(1).max(1);
            let color = match active_weights(weighting, slot, count) {
                Some(weights) => weighted_index(rng, weights.get(..count).unwrap_or(weights)),
                None => Some(rng.random_range(0..count)),
            };
            set_corner(grid, row, col, color.unwrap_or(0));
        }
    }
}

/// Break up runs of identical corners along the grid diagonals
///
/// A single pass over the corner layer. Wherever a 2x3 or 3x2 window of
/// cells equals its diagonal neighbors, one interior corner is recolored,
/// provided its type has more than one color.
pub fn reduce_repetition<R>(
    grid: &mut ColorGrid,
    rng: &mut R,
    num_color: &[usize; 6],
    weighting: Option<&Weighting>,
) -> usize
where
    R: Rng + ?Sized,
{
    let (rows, cols) = grid.dimensions();
    let mut recolored = 0;
    for row in 0..rows.saturating_sub(3) {
        for col in 0..cols.saturating_sub(3) {
            let tall = (0..2).all(|dc| (0..3).all(|dr| grid.diagonal_match(row + dr, col + dc)));
            if tall && recolor(grid, rng, num_color, weighting, row + 1, col + 1) {
                recolored += 1;
            }
            let wide = (0..2).all(|dr| (0..3).all(|dc| grid.diagonal_match(row + dr, col + dc)));
            if wide && recolor(grid, rng, num_color, weighting, row + 1, col + 2) {
                recolored += 1;
            }
        }
    }
    recolored
}

fn recolor<R>(
    grid: &mut ColorGrid,
    rng: &mut R,
    num_color: &[usize; 6],
    weighting: Option<&Weighting>,
    row: usize,
    col: usize,
) -> bool
where
    R: Rng + ?Sized,
{
    let slot = corner_type(row, col);
    let count = num_color.get(slot).copied().unwrap_or(1);
    if count <= 1 {
        return false;
    }
    let old = usize::try_from(grid.get(Layer::Corner, row as isize, col as isize)).unwrap_or(0);
    let weights = active_weights(weighting, slot, count);
    set_corner(grid, row, col, change_color(rng, old, count, weights));
    true
}

fn set_corner(grid: &mut ColorGrid, row: usize, col: usize, color: usize) {
    grid.set(Layer::Corner, row as isize, col as isize, color as i8);
}

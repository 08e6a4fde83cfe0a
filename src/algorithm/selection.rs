//! Constrained tile selection

use crate::algorithm::weighting::Weighting;
use crate::codec::tileset::Tile;
use rand::Rng;

/// Whether a tile agrees with every constrained field
///
/// Negative constraint values match any color.
pub fn matches_constraints(tile: &Tile, constraints: &[i8; 6]) -> bool {
    constraints
        .iter()
        .zip(&tile.colors)
        .all(|(&want, &have)| want < 0 || want == have)
}

/// Selection weight of a matching tile
///
/// Fields already fixed on entry are equal for every candidate, so only the
/// open fields contribute. Without a weighting every candidate weighs 1.
pub fn tile_weight(
    tile: &Tile,
    open: &[bool; 6],
    slots: &[usize; 6],
    weighting: Option<&Weighting>,
) -> u64 {
    let Some(weighting) = weighting else {
        return 1;
    };
    let mut weight = 1u64;
    for ((&is_open, &slot), &color) in open.iter().zip(slots).zip(&tile.colors) {
        if !is_open {
            continue;
        }
        let color = usize::try_from(color).unwrap_or(usize::MAX);
        if let Some(w) = weighting.weight(slot, color) {
            weight = weight.saturating_mul(u64::from(w));
        }
    }
    weight
}

// Matching tiles with their selection weights, in tileset order
fn candidates<'t>(
    tiles: &'t [Tile],
    constraints: &'t [i8; 6],
    open: &'t [bool; 6],
    slots: &'t [usize; 6],
    weighting: Option<&'t Weighting>,
) -> impl Iterator<Item = (usize, &'t Tile, u64)> + 't {
    tiles
        .iter()
        .enumerate()
        .filter(move |(_, tile)| matches_constraints(tile, constraints))
        .map(move |(index, tile)| (index, tile, tile_weight(tile, open, slots, weighting)))
}

/// Pick a random tile matching the constraints and fix them to its colors
///
/// Makes two passes over `tiles`: the first sums candidate weights, the
/// second stops on the randomly drawn candidate. On success every entry of
/// `constraints` is overwritten with the chosen tile's colors.
///
/// Returns `None` when no candidate has positive weight; `constraints` is
/// then left untouched.
pub fn choose_tile<R>(
    rng: &mut R,
    tiles: &[Tile],
    constraints: &mut [i8; 6],
    slots: &[usize; 6],
    weighting: Option<&Weighting>,
) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let fixed = *constraints;
    let open = fixed.map(|c| c < 0);
    let matching = || candidates(tiles, &fixed, &open, slots, weighting);

    let total = matching().fold(0u64, |sum, (_, _, weight)| sum.saturating_add(weight));
    if total == 0 {
        return None;
    }
    let target = rng.random_range(0..total);

    let mut running = 0u64;
    let mut chosen = None;
    for (index, tile, weight) in matching() {
        running = running.saturating_add(weight);
        if running > target {
            chosen = Some((index, tile.colors));
            break;
        }
    }
    let (index, colors) = chosen?;
    *constraints = colors;
    Some(index)
}

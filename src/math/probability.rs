//! Integer weighted random choices

use rand::Rng;

/// Pick an index with probability proportional to its weight
///
/// Returns `None` when every weight is zero or the slice is empty.
pub fn weighted_index<R>(rng: &mut R, weights: &[u32]) -> Option<usize>
where
    R: Rng + ?Sized,
{
    pick_weighted(rng, weights.iter().copied().enumerate())
}

/// Pick a color different from `old` among `count` colors
///
/// Without weights every other color is equally likely. With weights the
/// other colors are drawn proportionally; if they all weigh zero the old
/// color is kept. A slot with fewer than two colors always keeps `old`.
pub fn change_color<R>(rng: &mut R, old: usize, count: usize, weights: Option<&[u32]>) -> usize
where
    R: Rng + ?Sized,
{
    if count < 2 {
        return old;
    }
    match weights {
        None => (old + 1 + rng.random_range(0..count - 1)) % count,
        Some(weights) => {
            let others = weights
                .iter()
                .copied()
                .enumerate()
                .take(count)
                .filter(|&(color, _)| color != old);
            pick_weighted(rng, others).unwrap_or(old)
        }
    }
}

// Roulette selection over (index, weight) pairs
fn pick_weighted<R, I>(rng: &mut R, options: I) -> Option<usize>
where
    R: Rng + ?Sized,
    I: Iterator<Item = (usize, u32)> + Clone,
{
    let total: u64 = options.clone().map(|(_, w)| u64::from(w)).sum();
    if total == 0 {
        return None;
    }
    let choice = rng.random_range(0..total);
    let mut running = 0u64;
    for (index, weight) in options {
        running += u64::from(weight);
        if choice < running {
            return Some(index);
        }
    }
    None
}

//! Winner sampling — uniform and pick-count-weighted, without replacement

use rand::prelude::*;

use ld_core::Entity;

/// Draw `count` winners from `pool`
///
/// `count` is silently clamped to the pool size; every returned entity is
/// distinct. In uniform mode each pool member is equally likely in every
/// position. In weighted mode, entities with low pick counts are favored:
/// weight = `max_pick − pick_count + 1` (never below 1, so every candidate
/// keeps a non-zero probability regardless of history), recomputed over the
/// remaining candidates after each removal.
pub fn sample<R: Rng + ?Sized>(
    pool: &[Entity],
    count: u32,
    weighted: bool,
    rng: &mut R,
) -> Vec<Entity> {
    let count = (count as usize).min(pool.len());
    if count == 0 {
        return Vec::new();
    }

    if weighted {
        weighted_sample(pool, count, rng)
    } else {
        let mut shuffled = pool.to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        shuffled
    }
}

/// Iterative weighted sampling without replacement
fn weighted_sample<R: Rng + ?Sized>(pool: &[Entity], count: usize, rng: &mut R) -> Vec<Entity> {
    let mut remaining = pool.to_vec();
    let mut winners = Vec::with_capacity(count);

    // Reference point for the inverse weighting, fixed for the whole draw
    let max_pick = remaining.iter().map(|e| e.pick_count).max().unwrap_or(0).max(1);

    while winners.len() < count && !remaining.is_empty() {
        let weights: Vec<u64> = remaining
            .iter()
            .map(|e| u64::from(max_pick.saturating_sub(e.pick_count) + 1))
            .collect();
        let total: u64 = weights.iter().sum();

        let mut threshold = rng.random_range(0..total);
        let mut selected = 0;
        for (i, w) in weights.iter().enumerate() {
            if threshold < *w {
                selected = i;
                break;
            }
            threshold -= w;
        }

        winners.push(remaining.remove(selected));
    }

    winners
}

//! Sampling from pools of values.

use crate::records::CATEGORIES;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Sample `k` distinct elements from the pool.
///
/// Returns `None` when the pool holds fewer than `k` elements. The sample is never
/// shortened and never contains an element twice.
pub fn sample_distinct<'a, R: Rng + ?Sized, T>(
    rng: &mut R,
    pool: &'a [T],
    k: usize,
) -> Option<Vec<&'a T>> {
    if k > pool.len() {
        return None;
    }
    Some(pool.choose_multiple(rng, k).collect())
}

/// Pick between one and three distinct categories from the fixed vocabulary.
pub fn generate_categories<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(1..=3);
    CATEGORIES
        .choose_multiple(rng, count)
        .map(|category| category.to_string())
        .collect()
}

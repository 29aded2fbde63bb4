use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// An item with an identifying name used for de-duplication.
pub trait Named {
    /// Identifying name; two items with the same name count as duplicates.
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Build the RNG used for selections.
///
/// A seed yields reproducible picks; `None` seeds from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// In-place unbiased shuffle; every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Pick up to `count` items with pairwise-distinct names, in random order.
///
/// The input is never reordered. Items are shuffled, then the first
/// occurrence of each name is kept until `count` names are collected. If that
/// falls short while the pool still holds at least `count` entries, unused
/// items are appended in their original order (never repeating a name).
///
/// `count == 0` yields nothing; a `count` above the number of distinct names
/// yields every distinct name once.
pub fn select_unique<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Named + Clone,
    R: Rng + ?Sized,
{
    if count == 0 || items.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    shuffle(&mut order, rng);

    let cap = count.min(items.len());
    let mut used = HashSet::<&str>::with_capacity(cap);
    let mut picked = Vec::<usize>::with_capacity(cap);
    for &idx in &order {
        if picked.len() == count {
            break;
        }
        if used.insert(items[idx].name()) {
            picked.push(idx);
        }
    }

    let primary = picked.len();
    if primary < count && items.len() >= count {
        for (idx, item) in items.iter().enumerate() {
            if picked.len() == count {
                break;
            }
            if used.insert(item.name()) {
                picked.push(idx);
            }
        }
    }

    tracing::debug!(
        requested = count,
        pool = items.len(),
        primary,
        backfilled = picked.len() - primary,
        "selected unique items"
    );

    picked.into_iter().map(|idx| items[idx].clone()).collect()
}

/// [`select_unique`] with a freshly entropy-seeded RNG.
pub fn select_unique_random<T: Named + Clone>(items: &[T], count: usize) -> Vec<T> {
    select_unique(items, count, &mut rand::thread_rng())
}

/// Pick one item uniformly at random, or `None` for an empty slice.
pub fn pick_one<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

#[cfg(test)]
#[path = "../../tests/unit/select/unique.rs"]
mod tests;

use rand::Rng;

/// Shuffle `items` in place with the Fisher–Yates algorithm.
///
/// Walks from the last index down to 1 and swaps each element with one
/// chosen uniformly from `0..=i`. Every permutation is equally likely given
/// a uniform `rng`.
///
/// # Examples
///
/// ```
/// # use quiz_core::shuffle::fisher_yates;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut items = vec![1, 2, 3, 4, 5];
/// fisher_yates(&mut items, &mut rng);
/// items.sort_unstable();
/// assert_eq!(items, vec![1, 2, 3, 4, 5]);
/// ```
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw up to `count` distinct items from `pool` uniformly at random.
///
/// The pool is shuffled with [`fisher_yates`] and truncated, so each item
/// has the same chance of being selected and none is selected twice.
#[must_use]
pub fn draw<T, R: Rng + ?Sized>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    fisher_yates(&mut pool, rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..50).collect();
        fisher_yates(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn trivial_slices_are_left_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn draw_returns_distinct_items_capped_by_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = draw((0..20).collect::<Vec<u32>>(), 5, &mut rng);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 5);

        let picked = draw(vec![1, 2], 5, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn same_seed_gives_same_draw() {
        let a = draw((0..20).collect::<Vec<u32>>(), 5, &mut StdRng::seed_from_u64(11));
        let b = draw((0..20).collect::<Vec<u32>>(), 5, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<u32, u32> = HashMap::new();
        let rounds = 4_000;
        for _ in 0..rounds {
            let mut items = vec![0_u32, 1, 2, 3];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items[0]).or_default() += 1;
        }
        // Expected 1000 each.
        for value in 0..4 {
            let seen = counts.get(&value).copied().unwrap_or(0);
            assert!((800..=1200).contains(&seen), "value {value} seen {seen} times");
        }
    }
}

//! Seeded train/dev splitting.
//!
//! The random source is always passed in by the caller, so a given seed and
//! input length reproduce the same assignment on every run.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use rand::seq::index;

/// Disjoint, exhaustive train/dev partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub dev: Vec<T>,
}

impl<T> Split<T> {
    pub fn len(&self) -> usize {
        self.train.len() + self.dev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.dev.is_empty()
    }
}

/// Number of training items for `n` items: `floor(train_fraction * n)`, capped at `n`.
pub fn train_size(n: usize, train_fraction: f64) -> usize {
    ((train_fraction * n as f64).floor() as usize).min(n)
}

/// Split `items` into train and dev sets.
///
/// A uniform sample (without replacement) of `train_size` indices forms the
/// training set. A second, independent permutation of all indices then decides
/// output order: walking it, each item goes to train if its index was sampled
/// and to dev otherwise. Both outputs follow the permutation order.
pub fn split_train_dev<T, R>(items: Vec<T>, train_fraction: f64, rng: &mut R) -> Split<T>
where
    R: Rng + ?Sized,
{
    let n = items.len();
    let train_indices: HashSet<usize> = index::sample(rng, n, train_size(n, train_fraction))
        .into_iter()
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut train = Vec::with_capacity(train_indices.len());
    let mut dev = Vec::with_capacity(n - train_indices.len());

    for i in order {
        let Some(item) = slots[i].take() else {
            continue;
        };
        if train_indices.contains(&i) {
            train.push(item);
        } else {
            dev.push(item);
        }
    }

    tracing::debug!(train = train.len(), dev = dev.len(), "Split dataset");

    Split { train, dev }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn split_with_seed(n: usize, seed: u64) -> Split<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        split_train_dev((0..n).collect(), 0.8, &mut rng)
    }

    #[test]
    fn train_size_floors() {
        assert_eq!(train_size(10, 0.8), 8);
        assert_eq!(train_size(7, 0.8), 5);
        assert_eq!(train_size(1, 0.8), 0);
        assert_eq!(train_size(0, 0.8), 0);
        assert_eq!(train_size(3, 1.0), 3);
    }

    #[test]
    fn same_seed_same_assignment() {
        assert_eq!(split_with_seed(57, 1234), split_with_seed(57, 1234));
    }

    #[test]
    fn different_seeds_usually_differ() {
        assert_ne!(split_with_seed(100, 1), split_with_seed(100, 2));
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        for n in [0, 1, 2, 5, 10, 33, 100] {
            let split = split_with_seed(n, 1234);
            assert_eq!(split.len(), n);
            assert_eq!(split.train.len(), train_size(n, 0.8), "n={n}");

            let train: HashSet<usize> = split.train.iter().copied().collect();
            let dev: HashSet<usize> = split.dev.iter().copied().collect();
            assert!(train.is_disjoint(&dev), "n={n}");
            assert_eq!(train.len() + dev.len(), n, "duplicates for n={n}");
        }
    }

    #[test]
    fn empty_input_gives_empty_split() {
        let split = split_with_seed(0, 1234);
        assert!(split.is_empty());
    }

    #[test]
    fn full_fraction_puts_everything_in_train() {
        let mut rng = StdRng::seed_from_u64(7);
        let split = split_train_dev((0..10).collect::<Vec<_>>(), 1.0, &mut rng);
        assert_eq!(split.train.len(), 10);
        assert!(split.dev.is_empty());
    }
}

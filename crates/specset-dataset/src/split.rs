// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Seeded shuffle and train/dev/test partition.

use std::path::PathBuf;

use rand::Rng;
use rand::seq::SliceRandom;
use specset_core::{Split, SplitRatios};

/// Files assigned to each split. Every input path lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSplit {
    pub train: Vec<PathBuf>,
    pub dev: Vec<PathBuf>,
    pub test: Vec<PathBuf>,
}

impl DatasetSplit {
    /// Sort `files`, shuffle them with `rng`, and cut the result at the
    /// boundaries given by `ratios`.
    ///
    /// Sorting first makes the assignment depend only on the set of files and
    /// the rng state, not on directory listing order.
    pub fn shuffle_and_partition<R>(mut files: Vec<PathBuf>, rng: &mut R, ratios: SplitRatios) -> Self
    where
        R: Rng + ?Sized,
    {
        files.sort();
        files.shuffle(rng);

        let (split1, split2) = ratios.boundaries(files.len());
        let test = files.split_off(split2);
        let dev = files.split_off(split1);
        Self {
            train: files,
            dev,
            test,
        }
    }

    /// Files assigned to `split`, in shuffled order.
    pub fn files(&self, split: Split) -> &[PathBuf] {
        match split {
            Split::Train => &self.train,
            Split::Dev => &self.dev,
            Split::Test => &self.test,
        }
    }

    /// Total number of files across all splits.
    pub fn len(&self) -> usize {
        self.train.len() + self.dev.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn names(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("data/img{i}.png"))).collect()
    }

    fn split(n: usize, seed: u64) -> DatasetSplit {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        DatasetSplit::shuffle_and_partition(names(n), &mut rng, SplitRatios::default())
    }

    #[test]
    fn sizes_follow_floor_rule() {
        for n in 0..200 {
            let s = split(n, 1);
            assert_eq!(s.train.len(), n * 8 / 10, "train size for n={n}");
            assert_eq!(s.dev.len(), n * 9 / 10 - n * 8 / 10, "dev size for n={n}");
            assert_eq!(s.test.len(), n - n * 9 / 10, "test size for n={n}");
            assert_eq!(s.len(), n);
        }
    }

    #[test]
    fn splits_are_disjoint_and_cover_input() {
        let s = split(137, 42);
        let mut seen = BTreeSet::new();
        for part in Split::ALL {
            for f in s.files(part) {
                assert!(seen.insert(f.clone()), "{} assigned twice", f.display());
            }
        }
        let expected: BTreeSet<PathBuf> = names(137).into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn same_seed_same_assignment() {
        assert_eq!(split(64, 7), split(64, 7));
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        assert_ne!(split(64, 1).train, split(64, 2).train);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut reversed = names(30);
        reversed.reverse();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let from_reversed =
            DatasetSplit::shuffle_and_partition(reversed, &mut rng, SplitRatios::default());
        assert_eq!(from_reversed, split(30, 5));
    }

    #[test]
    fn empty_input_gives_empty_splits() {
        let s = split(0, 1);
        assert!(s.is_empty());
    }
}

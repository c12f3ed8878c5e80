// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the dataset builder.

use crate::error::SpecsetError;

/// One partition of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// Every split, in the order they are written.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Short lowercase name (`train`, `dev`, `test`).
    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }

    /// Name of the output subdirectory for this split (e.g. `train_spec`).
    pub fn dir_name(&self) -> String {
        format!("{}_spec", self.name())
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Percentage of the shuffled file list given to train and dev.
/// Test receives whatever remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRatios {
    pub train_percent: u8,
    pub dev_percent: u8,
}

impl SplitRatios {
    /// Index boundaries `(train_end, dev_end)` for `n` files.
    ///
    /// Uses integer arithmetic so `floor(0.8 * n)` is exact for every `n`.
    pub fn boundaries(&self, n: usize) -> (usize, usize) {
        let train_cut = u64::from(self.train_percent);
        let dev_cut = (train_cut + u64::from(self.dev_percent)).min(100);
        let n64 = n as u64;
        let split1 = ((n64 * train_cut / 100) as usize).min(n);
        let split2 = ((n64 * dev_cut / 100) as usize).clamp(split1, n);
        (split1, split2)
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train_percent: 80,
            dev_percent: 10,
        }
    }
}

/// Parse a shuffle seed given on the command line.
///
/// Any signed 64-bit integer is accepted; a negative seed selects the same
/// shuffle as its absolute value.
pub fn parse_seed(raw: &str) -> Result<u64, SpecsetError> {
    raw.trim()
        .parse::<i64>()
        .map(i64::unsigned_abs)
        .map_err(|_| SpecsetError::InvalidSeed(raw.to_string()))
}

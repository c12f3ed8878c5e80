// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dataset build configuration.

use std::path::PathBuf;

use crate::types::SplitRatios;

/// What to do with an input image that has no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaPolicy {
    /// Treat every pixel as fully opaque.
    #[default]
    AssumeOpaque,
    /// Abort the build with `SpecsetError::MissingAlpha`.
    Require,
}

/// Settings for one dataset build.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding the source `.png` spectrograms.
    pub data_dir: PathBuf,
    /// Root of the `{train,dev,test}_spec` output tree.
    pub output_dir: PathBuf,
    /// Seed for the shuffle that assigns files to splits.
    pub seed: u64,
    /// Resize trimmed images to `size x size` before saving.
    pub resize: Option<u32>,
    pub alpha_policy: AlphaPolicy,
    /// JPEG encoder quality (1-100).
    pub jpeg_quality: u8,
    pub ratios: SplitRatios,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/spectrograms"),
            output_dir: PathBuf::from("data/altered_spectrograms"),
            seed: 1,
            resize: None,
            alpha_policy: AlphaPolicy::AssumeOpaque,
            jpeg_quality: 100,
            ratios: SplitRatios::default(),
        }
    }
}

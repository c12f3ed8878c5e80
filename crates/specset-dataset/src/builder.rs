// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dataset build driver.
//
// Order of work: check the input directory, enumerate and split, create the
// output tree, then process every split in `Split::ALL` order. The first
// failing file aborts the build; files already written stay on disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use specset_core::Split;
use specset_core::config::DatasetConfig;
use specset_core::error::{Result, SpecsetError};
use tracing::{info, instrument};

use crate::layout::OutputLayout;
use crate::pipeline::{ProcessOptions, process_image};
use crate::scan::list_images;
use crate::split::DatasetSplit;

/// Output files written by a build, per split.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    written: BTreeMap<Split, Vec<PathBuf>>,
    reused_dirs: Vec<PathBuf>,
}

impl BuildReport {
    fn record(&mut self, split: Split, path: PathBuf) {
        self.written.entry(split).or_default().push(path);
    }

    /// Files written for `split`, in processing order.
    pub fn files(&self, split: Split) -> &[PathBuf] {
        self.written.get(&split).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.written.values().map(Vec::len).sum()
    }

    /// Output directories that already existed and were written into as-is.
    pub fn reused_dirs(&self) -> &[PathBuf] {
        &self.reused_dirs
    }
}

/// Builds the train/dev/test tree described by a [`DatasetConfig`].
pub struct DatasetBuilder {
    config: DatasetConfig,
    options: ProcessOptions,
}

impl DatasetBuilder {
    pub fn new(config: DatasetConfig) -> Self {
        let options = ProcessOptions::from(&config);
        Self { config, options }
    }

    /// Enumerate and split the input without writing anything.
    ///
    /// The shuffle uses ChaCha8 seeded from `config.seed`, so a seed picks the
    /// same assignment on every platform and release.
    pub fn plan(&self) -> Result<DatasetSplit> {
        let files = list_images(&self.config.data_dir)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        Ok(DatasetSplit::shuffle_and_partition(
            files,
            &mut rng,
            self.config.ratios,
        ))
    }

    /// Run the whole build.
    #[instrument(
        skip_all,
        fields(
            data_dir = %self.config.data_dir.display(),
            output_dir = %self.config.output_dir.display(),
            seed = self.config.seed,
        )
    )]
    pub fn build(&self) -> Result<BuildReport> {
        // Checked before anything is created on disk.
        if !self.config.data_dir.is_dir() {
            return Err(SpecsetError::DatasetNotFound(self.config.data_dir.clone()));
        }

        let split = self.plan()?;
        info!(
            total = split.len(),
            train = split.train.len(),
            dev = split.dev.len(),
            test = split.test.len(),
            "Dataset split"
        );

        let mut layout = OutputLayout::prepare(&self.config.output_dir)?;
        let mut report = BuildReport::default();

        for part in Split::ALL {
            let dir = layout.ensure_split_dir(part)?;
            info!(
                "Processing {} data, saving preprocessed data to {}",
                part,
                dir.display()
            );

            let files = split.files(part);
            for (index, file) in files.iter().enumerate() {
                let written = process_image(file, &dir, &self.options)?;
                info!(
                    split = %part,
                    n = index + 1,
                    of = files.len(),
                    output = %written.display(),
                    "Image written"
                );
                report.record(part, written);
            }
        }

        report.reused_dirs = layout.reused_dirs().to_vec();
        info!(
            written = report.total(),
            reused_dirs = report.reused_dirs.len(),
            "Done building dataset"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_files() {
        let report = BuildReport::default();
        assert_eq!(report.total(), 0);
        assert!(report.files(Split::Test).is_empty());
    }

    #[test]
    fn report_counts_per_split() {
        let mut report = BuildReport::default();
        report.record(Split::Train, PathBuf::from("a.jpg"));
        report.record(Split::Train, PathBuf::from("b.jpg"));
        report.record(Split::Dev, PathBuf::from("c.jpg"));
        assert_eq!(report.files(Split::Train).len(), 2);
        assert_eq!(report.files(Split::Dev).len(), 1);
        assert_eq!(report.total(), 3);
    }
}

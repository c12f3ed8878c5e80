// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// specset — Spectrogram dataset builder
//
// Entry point. Initialises logging, parses arguments, and runs one build.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use specset_core::config::{AlphaPolicy, DatasetConfig};
use specset_core::human_errors::humanize_error;
use specset_core::{Split, SpecsetError, parse_seed};
use specset_dataset::DatasetBuilder;

#[derive(Debug, Parser)]
#[command(name = "specset")]
#[command(
    about = "Trim spectrogram borders, flatten them onto white, and split them into train/dev/test JPEG sets"
)]
#[command(version)]
struct Cli {
    /// Directory with the spectrogram dataset (.png files).
    #[arg(long = "data_dir", visible_alias = "data-dir", default_value = "data/spectrograms")]
    data_dir: PathBuf,

    /// Where to write the new data.
    #[arg(
        long = "output_dir",
        visible_alias = "output-dir",
        default_value = "data/altered_spectrograms"
    )]
    output_dir: PathBuf,

    /// Seed for random shuffling of files into train, dev, test sets.
    /// Negative values select the same shuffle as their absolute value.
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    seed: String,

    /// Resize every trimmed image to SIZE x SIZE (bilinear) before saving.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Fail on images without an alpha channel instead of treating them as opaque.
    #[arg(long = "require_alpha", visible_alias = "require-alpha")]
    require_alpha: bool,
}

impl Cli {
    fn into_config(self) -> Result<DatasetConfig, SpecsetError> {
        Ok(DatasetConfig {
            data_dir: self.data_dir,
            output_dir: self.output_dir,
            seed: parse_seed(&self.seed)?,
            resize: self.size,
            alpha_policy: if self.require_alpha {
                AlphaPolicy::Require
            } else {
                AlphaPolicy::AssumeOpaque
            },
            ..DatasetConfig::default()
        })
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "dataset build failed");
            eprintln!("{}", humanize_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SpecsetError> {
    let config = cli.into_config()?;
    tracing::debug!(?config, "Starting dataset build");

    let report = DatasetBuilder::new(config).build()?;
    for split in Split::ALL {
        tracing::info!(
            split = %split,
            images = report.files(split).len(),
            "Split written"
        );
    }
    Ok(())
}

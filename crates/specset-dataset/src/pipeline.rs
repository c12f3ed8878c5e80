// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-file pipeline: open -> trim -> (resize) -> flatten onto white -> JPEG.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use specset_core::config::{AlphaPolicy, DatasetConfig};
use specset_core::error::{Result, SpecsetError};
use specset_image::{BorderTrimmer, ImageProcessor, TrimOutcome};
use tracing::{debug, instrument};

/// Extension given to every output file.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Per-image settings shared by every file in a build.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
    pub trimmer: BorderTrimmer,
    pub resize: Option<u32>,
    pub alpha_policy: AlphaPolicy,
    pub jpeg_quality: u8,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::from(&DatasetConfig::default())
    }
}

impl From<&DatasetConfig> for ProcessOptions {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            trimmer: BorderTrimmer::default(),
            resize: config.resize,
            alpha_policy: config.alpha_policy,
            jpeg_quality: config.jpeg_quality,
        }
    }
}

/// Output file name for `input`: its stem with a `.jpg` extension.
pub fn output_file_name(input: &Path) -> Result<OsString> {
    let stem = input.file_stem().ok_or_else(|| {
        SpecsetError::ImageError(format!("{} has no file name", input.display()))
    })?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Ok(name)
}

/// Run the full pipeline for one file and write the JPEG into `output_dir`.
///
/// Returns the path written. An existing file with the same name is
/// overwritten.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn process_image(path: &Path, output_dir: &Path, options: &ProcessOptions) -> Result<PathBuf> {
    let target = output_dir.join(output_file_name(path)?);

    let processor = match ImageProcessor::open(path)?.trim(&options.trimmer) {
        TrimOutcome::Cropped { image, bounds } => {
            debug!(
                left = bounds.left(),
                top = bounds.top(),
                width = bounds.width(),
                height = bounds.height(),
                "Border trimmed"
            );
            ImageProcessor::from_dynamic(image)
        }
        TrimOutcome::Unchanged(image) => {
            debug!("Nothing to trim, keeping the full image");
            ImageProcessor::from_dynamic(image)
        }
    };

    let processor = match options.resize {
        Some(size) => processor.resize_exact(size, size),
        None => processor,
    };

    if !processor.has_alpha() {
        match options.alpha_policy {
            AlphaPolicy::Require => return Err(SpecsetError::MissingAlpha(path.to_path_buf())),
            AlphaPolicy::AssumeOpaque => debug!("No alpha channel, treating image as opaque"),
        }
    }

    processor
        .flatten_onto_white()
        .save_jpeg(&target, options.jpeg_quality)?;
    Ok(target)
}

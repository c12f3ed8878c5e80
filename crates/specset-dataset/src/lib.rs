// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// specset-dataset — Turns a directory of spectrogram PNGs into a
// train/dev/test tree of trimmed, white-backed JPEGs.
//
//   data_dir/*.png ─ scan ─> sorted paths ─ split ─> DatasetSplit
//        ─ layout ─> output_dir/{train,dev,test}_spec/ ─ pipeline ─> <stem>.jpg

pub mod builder;
pub mod layout;
pub mod pipeline;
pub mod scan;
pub mod split;

pub use builder::{BuildReport, DatasetBuilder};
pub use layout::OutputLayout;
pub use pipeline::{ProcessOptions, output_file_name, process_image};
pub use scan::list_images;
pub use split::DatasetSplit;

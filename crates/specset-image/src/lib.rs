// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// specset-image — Per-image operations for the dataset builder.
//
// Provides border trimming (bounding box of everything that differs from the
// top-left background colour), white-background flattening via the alpha
// channel, optional resizing, and JPEG export.

pub mod processor;
pub mod trim;

// Re-export the primary structs so callers can use `specset_image::ImageProcessor` etc.
pub use processor::ImageProcessor;
pub use trim::{BorderTrimmer, TrimOutcome};

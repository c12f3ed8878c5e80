// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for specset.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all specset operations.
#[derive(Debug, Error)]
pub enum SpecsetError {
    // -- Preconditions --
    #[error("Couldn't find the dataset at {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("invalid seed {0:?}: expected an integer")]
    InvalidSeed(String),

    // -- Image pipeline --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("image {} has no alpha channel to use as a mask", .0.display())]
    MissingAlpha(PathBuf),

    // -- Filesystem --
    #[error("I/O error at {}: {source}", path.display())]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpecsetError {
    /// Attach a path to an I/O error.
    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoAt {
            path: path.into(),
            source,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SpecsetError>;

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output directory tree: `output_dir/{train,dev,test}_spec/`.

use std::path::{Path, PathBuf};

use specset_core::Split;
use specset_core::error::{Result, SpecsetError};
use tracing::{debug, warn};

/// Root of the output tree. Existing directories are reused as they are;
/// nothing is ever deleted.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    /// Directories that already existed when they were prepared.
    reused: Vec<PathBuf>,
}

impl OutputLayout {
    /// Create `root` if needed. An existing directory only produces a warning.
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut layout = Self {
            root: root.clone(),
            reused: Vec::new(),
        };
        layout.create_or_warn(root, "output dir")?;
        Ok(layout)
    }

    /// Directories that were already on disk, in the order they were reached.
    pub fn reused_dirs(&self) -> &[PathBuf] {
        &self.reused
    }

    /// Path of the directory for `split`, without touching the filesystem.
    pub fn split_dir(&self, split: Split) -> PathBuf {
        self.root.join(split.dir_name())
    }

    /// Create the directory for `split` if needed and return its path.
    pub fn ensure_split_dir(&mut self, split: Split) -> Result<PathBuf> {
        let dir = self.split_dir(split);
        self.create_or_warn(dir.clone(), "split dir")?;
        Ok(dir)
    }

    fn create_or_warn(&mut self, dir: PathBuf, label: &str) -> Result<()> {
        if dir.exists() {
            warn!(dir = %dir.display(), "{label} already exists, reusing it");
            self.reused.push(dir);
            return Ok(());
        }
        create_dir(&dir)
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|err| SpecsetError::io_at(dir, err))?;
    debug!(dir = %dir.display(), "Created directory");
    Ok(())
}

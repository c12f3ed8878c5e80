// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Input enumeration.

use std::path::{Path, PathBuf};

use specset_core::error::{Result, SpecsetError};
use tracing::debug;

/// Suffix an input file name must end with (case-sensitive).
pub const IMAGE_SUFFIX: &str = ".png";

/// List the `.png` files directly inside `data_dir`, sorted lexicographically.
///
/// Fails with [`SpecsetError::DatasetNotFound`] when `data_dir` is not a
/// directory. Subdirectories and other files are skipped.
pub fn list_images(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        return Err(SpecsetError::DatasetNotFound(data_dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(data_dir).map_err(|err| SpecsetError::io_at(data_dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| SpecsetError::io_at(data_dir, err))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!(name = ?entry.file_name(), "Skipping non UTF-8 file name");
            continue;
        };
        if !name.ends_with(IMAGE_SUFFIX) {
            continue;
        }
        let path = data_dir.join(name);
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    debug!(count = files.len(), dir = %data_dir.display(), "Found input images");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_dataset_not_found() {
        let err = list_images(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, SpecsetError::DatasetNotFound(_)));
    }
}

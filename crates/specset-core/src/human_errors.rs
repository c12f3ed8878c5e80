// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::SpecsetError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user must fix an argument or the input data and re-run.
    ActionRequired,
    /// The environment failed (disk full, permissions).
    Environment,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    pub message: String,
    pub suggestion: String,
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n  hint: {}", self.message, self.suggestion)
    }
}

/// Convert a `SpecsetError` into a `HumanError`.
pub fn humanize_error(err: &SpecsetError) -> HumanError {
    match err {
        SpecsetError::DatasetNotFound(path) => HumanError {
            message: format!("Couldn't find the dataset at {}", path.display()),
            suggestion: "Pass the directory holding the .png spectrograms with --data_dir.".into(),
            severity: Severity::ActionRequired,
        },

        SpecsetError::InvalidSeed(raw) => HumanError {
            message: format!("The seed {raw:?} is not a whole number."),
            suggestion: "Use an integer such as --seed 1 so the split is reproducible.".into(),
            severity: Severity::ActionRequired,
        },

        SpecsetError::ImageError(detail) => HumanError {
            message: "An image could not be processed.".into(),
            suggestion: format!(
                "Check that the file is a valid image, remove it, and re-run. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        SpecsetError::MissingAlpha(path) => HumanError {
            message: format!("{} has no transparency channel.", path.display()),
            suggestion: "Re-export the spectrogram with an alpha channel, or drop --require_alpha to treat it as opaque.".into(),
            severity: Severity::ActionRequired,
        },

        SpecsetError::IoAt { path, source } => humanize_io(&path.display().to_string(), source),
    }
}

fn humanize_io(location: &str, source: &std::io::Error) -> HumanError {
    let suggestion = match source.kind() {
        std::io::ErrorKind::PermissionDenied => {
            format!("Make sure you are allowed to write to {location}.")
        }
        std::io::ErrorKind::NotFound => format!("Check that {location} exists."),
        _ => format!("Check free disk space and try again. ({source})"),
    };
    HumanError {
        message: format!("Reading or writing {location} failed."),
        suggestion,
        severity: Severity::Environment,
    }
}

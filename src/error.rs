//! # Error Handling
//!
//! This module defines the centralized error type for `flutter-release`. It uses
//! the `thiserror` library to describe every way a release can stop early.
//!
//! Errors fall into two groups:
//!
//! - **Validation errors** (`MissingVersion`, `InvalidVersion`): the operator gave
//!   no usable version. Nothing has been written yet and the binary exits with
//!   status 1 after printing an `ERROR:` line.
//! - **Everything else**: manifest I/O, a manifest without a version field, a
//!   command that could not be spawned, or (with `--fail-fast`) a command that
//!   exited non-zero. Side effects of earlier steps are left in place.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for release operations
#[derive(Error, Debug)]
pub enum Error {
    /// The operator submitted an empty version.
    #[error("A new version number has to be given")]
    MissingVersion,

    /// The operator submitted something other than `MAJOR.MINOR.PATCH`.
    #[error("Invalid version number given: {input}")]
    InvalidVersion { input: String },

    /// A manifest could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest has no `version: X.Y.Z` field.
    #[error("No version field found in {}", path.display())]
    VersionNotFound { path: PathBuf },

    /// A rewritten manifest could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external command could not be started at all.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited non-zero while failing fast.
    #[error("Command `{command}` failed with {}", code.map(|c| format!("exit code {}", c)).unwrap_or_else(|| "no exit code".to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    /// Reading the operator's answer failed.
    #[error("Failed to read the new version: {0}")]
    Prompt(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a rejected operator input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingVersion | Error::InvalidVersion { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

//! # Manifest Versions
//!
//! Reading, validating and rewriting the version fields of the two manifests a
//! release touches:
//!
//! - `pubspec.yaml`, which carries a `version: MAJOR.MINOR.PATCH` line.
//! - the iOS podspec, which carries a quoted `'MAJOR.MINOR.PATCH'` literal.
//!
//! The rewrite functions are pure: they take the manifest text and the new
//! version and return the new text. Only the first match is replaced and every
//! other byte is preserved.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::error::{Error, Result};

static PUBSPEC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"version: ([0-9]+\.[0-9]+\.[0-9]+)").expect("valid regex"));

static PODSPEC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([0-9]+\.[0-9]+\.[0-9]+)'").expect("valid regex"));

static STRICT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("valid regex"));

/// How the pubspec `version:` line is rendered for a new version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionTemplate {
    /// `version: <new>`
    Plain,
    /// `version: <new>+<new>`. The build slot receives the release version as
    /// well; existing app releases were tagged this way and the format is kept.
    WithBuild,
}

impl VersionTemplate {
    /// Render the replacement line for `new_version`.
    pub fn render(self, new_version: &str) -> String {
        match self {
            VersionTemplate::Plain => format!("version: {}", new_version),
            VersionTemplate::WithBuild => format!("version: {}+{}", new_version, new_version),
        }
    }
}

/// Check operator input against the strict `MAJOR.MINOR.PATCH` form.
///
/// Empty input is always rejected; there is no fallback to the current version.
pub fn validate_version(input: &str) -> Result<&str> {
    if input.is_empty() {
        return Err(Error::MissingVersion);
    }
    if !STRICT_VERSION.is_match(input) {
        return Err(Error::InvalidVersion {
            input: input.to_string(),
        });
    }
    Ok(input)
}

/// The first `version: X.Y.Z` in a pubspec, without the `version: ` prefix.
pub fn current_version(pubspec: &str) -> Option<&str> {
    PUBSPEC_VERSION
        .captures(pubspec)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read a pubspec and extract its current version.
///
/// Returns the full text alongside the version so the caller can rewrite it
/// without reading the file twice.
pub fn read_current_version(path: &Path) -> Result<(String, String)> {
    let text = read_manifest(path)?;
    let version = current_version(&text)
        .ok_or_else(|| Error::VersionNotFound {
            path: path.to_path_buf(),
        })?
        .to_string();
    Ok((text, version))
}

/// Read any manifest as text.
pub fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadManifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a manifest with new content.
pub fn write_manifest(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::WriteManifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the first `version: X.Y.Z` with the rendered template.
///
/// Any suffix after the matched triple (such as an existing `+build`) is left
/// untouched.
pub fn bump_pubspec(pubspec: &str, template: VersionTemplate, new_version: &str) -> String {
    let line = template.render(new_version);
    PUBSPEC_VERSION
        .replacen(pubspec, 1, NoExpand(&line))
        .into_owned()
}

/// Replace the first quoted `'X.Y.Z'` literal with `'<new>'`.
pub fn bump_podspec(podspec: &str, new_version: &str) -> String {
    let literal = format!("'{}'", new_version);
    PODSPEC_VERSION
        .replacen(podspec, 1, NoExpand(&literal))
        .into_owned()
}

//! # Flutter Release Library
//!
//! Core of the `flutter-release` tool, which cuts a release of a Flutter
//! package in one fixed sequence:
//!
//! 1.  Read the current version from `pubspec.yaml`.
//! 2.  Ask for the new version and validate it as `MAJOR.MINOR.PATCH`.
//! 3.  Rewrite `pubspec.yaml` (and, for plugins, the iOS podspec).
//! 4.  Refresh lockfiles with `flutter pub get` (and `pod install`).
//! 5.  `git add` the release files, commit as `v<version>`, tag as `<version>`.
//! 6.  Push the commit and the tags.
//!
//! ## Quick Example
//!
//! ```
//! use flutter_release::manifest::{bump_pubspec, validate_version, VersionTemplate};
//!
//! let version = validate_version("1.2.4").unwrap();
//! let pubspec = bump_pubspec("name: demo\nversion: 1.2.3\n", VersionTemplate::Plain, version);
//! assert_eq!(pubspec, "name: demo\nversion: 1.2.4\n");
//! ```
//!
//! ## Modules
//!
//! - **`manifest`**: version extraction, validation and the pure rewrite functions.
//! - **`layout`**: the two fixed project shapes and their ordered command lists.
//! - **`runner`**: the `CommandRunner` seam in front of `flutter`, `pod` and `git`.
//! - **`prompt`**: where the operator's answer comes from.
//! - **`release`**: the straight-line flow tying it all together.
//! - **`output`**: color and emoji preferences for progress output.
//! - **`error`**: the library error type.

pub mod error;
pub mod layout;
pub mod manifest;
pub mod output;
pub mod prompt;
pub mod release;
pub mod runner;

#[cfg(test)]
mod manifest_proptest;

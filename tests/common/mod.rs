//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::plugin("1.2.3");
//! fixture.command().arg("--dry-run").write_stdin("1.2.4\n").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Manifest snippets shaped like the real plugin files.
#[allow(dead_code)]
pub mod manifests {
    /// A plugin pubspec at the given version.
    pub fn pubspec(version: &str) -> String {
        format!(
            "name: flutter_native_barcode_scanner\n\
             description: A fast barcode scanner using the native platform APIs.\n\
             version: {}\n\
             homepage: https://github.com/cloudacy/flutter_native_barcode_scanner\n\
             \n\
             environment:\n  \
               sdk: \">=2.12.0 <3.0.0\"\n  \
               flutter: \">=1.20.0\"\n\
             \n\
             dependencies:\n  \
               flutter:\n    \
                 sdk: flutter\n",
            version
        )
    }

    /// A plugin podspec at the given version.
    pub fn podspec(version: &str) -> String {
        format!(
            "Pod::Spec.new do |s|\n  \
               s.name             = 'flutter_native_barcode_scanner'\n  \
               s.version          = '{}'\n  \
               s.summary          = 'Barcode scanner using the native platform APIs.'\n  \
               s.dependency 'Flutter'\n  \
               s.platform = :ios, '10.0'\n  \
               s.swift_version = '5.0'\n\
             end\n",
            version
        )
    }
}

/// A temporary Flutter project.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// An empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A plugin project: pubspec, podspec and the example iOS directory.
    pub fn plugin(version: &str) -> Self {
        let fixture = Self::new()
            .with_file("pubspec.yaml", &manifests::pubspec(version))
            .with_file(
                "ios/flutter_native_barcode_scanner.podspec",
                &manifests::podspec(version),
            );
        fixture
            .temp_dir
            .child("example/ios")
            .create_dir_all()
            .expect("Failed to create example/ios");
        fixture
    }

    /// An app project: pubspec only.
    pub fn app(version_line: &str) -> Self {
        Self::new().with_file("pubspec.yaml", &format!("name: demo_app\n{}\n", version_line))
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file of the project.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `flutter-release` command running in this project.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_flutter-release"));
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

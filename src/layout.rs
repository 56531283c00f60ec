//! # Project Layouts
//!
//! A release works on one of two fixed project shapes:
//!
//! - **Plugin**: a Flutter plugin with an iOS podspec and an example app whose
//!   CocoaPods lockfile is refreshed with `pod install`.
//! - **App**: a pubspec-only package whose version line carries a `+build`
//!   suffix.
//!
//! A [`Layout`] knows which files to rewrite, which files to stage and the
//! exact ordered list of commands to run for a given version.

use std::path::{Path, PathBuf};

use crate::manifest::VersionTemplate;
use crate::runner::Invocation;

/// Primary manifest of every layout.
pub const PUBSPEC: &str = "pubspec.yaml";

/// Default podspec of the plugin layout.
pub const DEFAULT_PODSPEC: &str = "ios/flutter_native_barcode_scanner.podspec";

/// Directory `pod install` runs in for the plugin layout.
pub const POD_INSTALL_DIR: &str = "example/ios";

/// The paths and template of one project shape, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub pubspec: PathBuf,
    pub template: VersionTemplate,
    pub podspec: Option<PathBuf>,
    pub pod_install_dir: Option<PathBuf>,
    pub staged: Vec<PathBuf>,
}

impl Layout {
    /// Plugin layout with the given podspec.
    pub fn plugin(podspec: impl Into<PathBuf>) -> Self {
        let podspec = podspec.into();
        Self {
            pubspec: PathBuf::from(PUBSPEC),
            template: VersionTemplate::Plain,
            staged: vec![
                PathBuf::from(PUBSPEC),
                PathBuf::from("pubspec.lock"),
                podspec.clone(),
                PathBuf::from("example/pubspec.lock"),
                PathBuf::from("example/ios/Podfile.lock"),
                PathBuf::from("CHANGELOG.md"),
            ],
            podspec: Some(podspec),
            pod_install_dir: Some(PathBuf::from(POD_INSTALL_DIR)),
        }
    }

    /// App layout: pubspec only, no CocoaPods step.
    pub fn app() -> Self {
        Self {
            pubspec: PathBuf::from(PUBSPEC),
            template: VersionTemplate::WithBuild,
            podspec: None,
            pod_install_dir: None,
            staged: vec![
                PathBuf::from(PUBSPEC),
                PathBuf::from("pubspec.lock"),
                PathBuf::from("CHANGELOG.md"),
            ],
        }
    }

    /// Files rewritten by a release, for progress output.
    pub fn manifests(&self) -> Vec<&Path> {
        std::iter::once(self.pubspec.as_path())
            .chain(self.podspec.as_deref())
            .collect()
    }

    /// Lockfile refresh commands, in order.
    pub fn refresh_commands(&self, root: &Path) -> Vec<Invocation> {
        let mut commands = vec![Invocation::new("flutter", ["pub", "get"], root)];
        if let Some(dir) = &self.pod_install_dir {
            commands.push(Invocation::new("pod", ["install"], &root.join(dir)));
        }
        commands
    }

    /// One `git add` per staged path, in order.
    pub fn stage_commands(&self, root: &Path) -> Vec<Invocation> {
        self.staged
            .iter()
            .map(|path| {
                Invocation::new("git", ["add".to_string(), path_arg(path)], root)
            })
            .collect()
    }

    /// Commit and tag for `version`.
    pub fn commit_commands(&self, root: &Path, version: &str) -> Vec<Invocation> {
        let message = format!("v{}", version);
        vec![
            Invocation::new("git", ["commit", "-m", message.as_str()], root),
            Invocation::new("git", ["tag", version], root),
        ]
    }

    /// Push the commit, then the tags.
    pub fn push_commands(&self, root: &Path) -> Vec<Invocation> {
        vec![
            Invocation::new("git", ["push"], root),
            Invocation::new("git", ["push", "--tags"], root),
        ]
    }

    /// Every external command of a release of `version`, in order.
    pub fn invocations(&self, root: &Path, version: &str) -> Vec<Invocation> {
        let mut all = self.refresh_commands(root);
        all.extend(self.stage_commands(root));
        all.extend(self.commit_commands(root, version));
        all.extend(self.push_commands(root));
        all
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::plugin(DEFAULT_PODSPEC)
    }
}

// git expects forward slashes on every platform.
fn path_arg(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

//! # Release Flow
//!
//! The single straight-line procedure behind `flutter-release`:
//!
//! 1.  Read the current version from `pubspec.yaml` (and the podspec text for
//!     the plugin layout).
//! 2.  Ask the operator for the new version and validate it. This is the only
//!     decision point; a rejected answer stops the release before anything is
//!     written.
//! 3.  Rewrite the manifests in memory and write them back.
//! 4.  Refresh lockfiles (`flutter pub get`, then `pod install` for plugins).
//! 5.  Stage, commit and tag.
//! 6.  Push the commit and the tags.
//!
//! Steps 3 to 6 are not transactional. Nothing is rolled back when a later step
//! fails. By default a command that exits non-zero is logged and the release
//! carries on with the next command; [`FailurePolicy::FailFast`] stops at the
//! first such command instead. A command that cannot be started at all always
//! stops the release.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use semver::Version;

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::manifest;
use crate::output::{emoji, OutputConfig};
use crate::prompt::VersionPrompt;
use crate::runner::{CommandRunner, CommandStatus, Invocation};

/// What to do when an external command exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log a warning and run the next command.
    #[default]
    Continue,
    /// Stop the release with [`Error::CommandFailed`].
    FailFast,
}

/// One external command and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub invocation: Invocation,
    pub status: CommandStatus,
}

/// Everything a finished release did.
#[derive(Debug, Clone, Default)]
pub struct ReleaseReport {
    pub previous_version: String,
    pub version: String,
    /// Manifests written, relative to the project root. Empty for dry runs.
    pub written: Vec<PathBuf>,
    pub steps: Vec<StepResult>,
}

impl ReleaseReport {
    /// Commands that exited non-zero, in the order they ran.
    pub fn failures(&self) -> Vec<&StepResult> {
        self.steps.iter().filter(|s| !s.status.success()).collect()
    }
}

/// A configured release of one project.
#[derive(Debug, Clone)]
pub struct Release {
    root: PathBuf,
    layout: Layout,
    policy: FailurePolicy,
    dry_run: bool,
    output: OutputConfig,
}

impl Release {
    pub fn new(root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
            policy: FailurePolicy::default(),
            dry_run: false,
            output: OutputConfig { use_color: false },
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Skip file writes. Commands still go to the runner, which is expected to
    /// be a [`crate::runner::DryRunRunner`].
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run the whole release.
    pub fn run(
        &self,
        prompt: &mut dyn VersionPrompt,
        runner: &mut dyn CommandRunner,
    ) -> Result<ReleaseReport> {
        let pubspec_path = self.root.join(&self.layout.pubspec);
        let (pubspec, current) = manifest::read_current_version(&pubspec_path)?;
        debug!("current version in {}: {}", pubspec_path.display(), current);

        let podspec = match &self.layout.podspec {
            Some(relative) => {
                let path = self.root.join(relative);
                let text = manifest::read_manifest(&path)?;
                Some((relative.clone(), path, text))
            }
            None => None,
        };

        let answer = prompt.ask(&current)?;
        let version = manifest::validate_version(&answer)?.to_string();
        warn_if_not_newer(&current, &version);

        let new_pubspec = manifest::bump_pubspec(&pubspec, self.layout.template, &version);
        let new_podspec = podspec
            .as_ref()
            .map(|(_, _, text)| manifest::bump_podspec(text, &version));

        let mut report = ReleaseReport {
            previous_version: current,
            version: version.clone(),
            ..ReleaseReport::default()
        };

        let manifest_list = self
            .layout
            .manifests()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" and ");

        if self.dry_run {
            println!(
                "{} Dry run: {} would be updated to {}",
                emoji(&self.output, "🔎", "[DRY]"),
                manifest_list,
                version
            );
        } else {
            manifest::write_manifest(&pubspec_path, &new_pubspec)?;
            report.written.push(self.layout.pubspec.clone());
            if let (Some((relative, path, _)), Some(text)) = (&podspec, &new_podspec) {
                manifest::write_manifest(path, text)?;
                report.written.push(relative.clone());
            }
            println!(
                "{} Updated {}! Running \"flutter pub get\" to update other files.",
                emoji(&self.output, "📝", "[OK]"),
                manifest_list
            );
        }

        self.run_all(runner, self.layout.refresh_commands(&self.root), &mut report)?;

        let staged = self
            .layout
            .staged
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} Staging {} ...", emoji(&self.output, "📦", "[ADD]"), staged);
        self.run_all(runner, self.layout.stage_commands(&self.root), &mut report)?;

        println!(
            "{} Creating version commit and tag ...",
            emoji(&self.output, "🔖", "[TAG]")
        );
        self.run_all(
            runner,
            self.layout.commit_commands(&self.root, &version),
            &mut report,
        )?;

        println!(
            "{} Pushing version commit and tag ...",
            emoji(&self.output, "🚀", "[PUSH]")
        );
        self.run_all(runner, self.layout.push_commands(&self.root), &mut report)?;

        Ok(report)
    }

    fn run_all(
        &self,
        runner: &mut dyn CommandRunner,
        invocations: Vec<Invocation>,
        report: &mut ReleaseReport,
    ) -> Result<()> {
        for invocation in invocations {
            info!("running `{}`", invocation);
            let status = runner.run(&invocation)?;
            let failed = !status.success();

            report.steps.push(StepResult {
                invocation: invocation.clone(),
                status,
            });

            if failed {
                match self.policy {
                    FailurePolicy::Continue => {
                        warn!(
                            "`{}` exited with {}, continuing",
                            invocation,
                            describe(status)
                        );
                    }
                    FailurePolicy::FailFast => {
                        return Err(Error::CommandFailed {
                            command: invocation.to_string(),
                            code: status.code,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn describe(status: CommandStatus) -> String {
    match status.code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}

/// Log a warning when `new` does not sort after `current`. Nothing is enforced.
fn warn_if_not_newer(current: &str, new: &str) {
    match (Version::parse(current), Version::parse(new)) {
        (Ok(current_ver), Ok(new_ver)) => {
            if new_ver <= current_ver {
                warn!(
                    "new version {} is not newer than the current version {}",
                    new, current
                );
            }
        }
        _ => debug!("skipping version ordering check for {} -> {}", current, new),
    }
}

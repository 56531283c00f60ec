//! Release command implementation
//!
//! Chooses the prompt and command runner for the current environment, runs the
//! release and reports the outcome:
//!
//! - a version on the command line skips the prompt
//! - a terminal gets an interactive `dialoguer` prompt
//! - anything else (a pipe, a file) is read as one line from stdin

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use flutter_release::layout::{Layout, DEFAULT_PODSPEC};
use flutter_release::output::{emoji, OutputConfig};
use flutter_release::prompt::{FixedPrompt, LinePrompt, TerminalPrompt, VersionPrompt};
use flutter_release::release::{FailurePolicy, Release, ReleaseReport};
use flutter_release::runner::{CommandRunner, DryRunRunner, SystemRunner};

/// Project shape being released
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutKind {
    /// Flutter plugin with an iOS podspec and an example app
    Plugin,
    /// pubspec-only package with a `+build` version suffix
    App,
}

/// Arguments for the release command
#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// New version (MAJOR.MINOR.PATCH); prompted for when omitted
    #[arg(value_name = "NEW_VERSION")]
    pub new_version: Option<String>,

    /// Project shape being released
    #[arg(long, value_enum, default_value_t = LayoutKind::Plugin)]
    pub layout: LayoutKind,

    /// Project root (defaults to current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Podspec to bump, relative to the root (plugin layout only)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PODSPEC)]
    pub podspec: PathBuf,

    /// Show what would be done without writing files or running commands
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Stop at the first external command that fails
    #[arg(long)]
    pub fail_fast: bool,
}

impl ReleaseArgs {
    fn layout(&self) -> Layout {
        match self.layout {
            LayoutKind::Plugin => Layout::plugin(self.podspec.clone()),
            LayoutKind::App => Layout::app(),
        }
    }

    fn policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        }
    }
}

/// Execute the release command, returning the process exit status
pub fn execute(args: ReleaseArgs, output: &OutputConfig) -> Result<u8> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let release = Release::new(root, args.layout())
        .with_policy(args.policy())
        .with_dry_run(args.dry_run)
        .with_output(output.clone());

    let mut prompt: Box<dyn VersionPrompt> = match args.new_version {
        Some(version) => Box::new(FixedPrompt(version)),
        None if io::stdin().is_terminal() && console::Term::stderr().is_term() => {
            Box::new(TerminalPrompt)
        }
        None => Box::new(LinePrompt::new(io::stdin().lock())),
    };

    let mut runner: Box<dyn CommandRunner> = if args.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(SystemRunner)
    };

    match release.run(prompt.as_mut(), runner.as_mut()) {
        Ok(report) => {
            print_summary(&report, output);
            Ok(0)
        }
        Err(err) if err.is_validation() => {
            println!("ERROR: {}", err);
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_summary(report: &ReleaseReport, output: &OutputConfig) {
    let failures = report.failures();
    if failures.is_empty() {
        println!(
            "{} Released {} (was {})",
            emoji(output, "✅", "[DONE]"),
            report.version,
            report.previous_version
        );
        return;
    }

    println!(
        "{} Released {} with {} failed command(s):",
        emoji(output, "⚠️", "[WARN]"),
        report.version,
        failures.len()
    );
    for step in failures {
        match step.status.code {
            Some(code) => println!("   {} (exit code {})", step.invocation, code),
            None => println!("   {} (terminated)", step.invocation),
        }
    }
}

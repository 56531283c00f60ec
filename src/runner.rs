//! # External Commands
//!
//! Every tool a release shells out to (`flutter`, `pod`, `git`) goes through the
//! [`CommandRunner`] trait so the sequence can be observed and replaced.
//!
//! - [`SystemRunner`] spawns real processes with inherited stdio and blocks
//!   until each one exits. No timeout is applied.
//! - [`DryRunRunner`] prints what would run and reports success.
//! - [`RecordingRunner`] records every invocation and replays scripted exit
//!   codes. It backs the tests.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// One external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// The full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// How an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: CommandStatus = CommandStatus { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run one external command to completion.
pub trait CommandRunner {
    /// Run `invocation` and report how it ended.
    ///
    /// An `Err` means the command could not be started; a non-zero exit is an
    /// `Ok` status that the caller decides how to treat.
    fn run(&mut self, invocation: &Invocation) -> Result<CommandStatus>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandStatus> {
        debug!("spawning {} in {}", invocation, invocation.cwd.display());

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()
            .map_err(|source| Error::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Prints each command instead of running it.
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandStatus> {
        println!("  would run: {}  (in {})", invocation, invocation.cwd.display());
        Ok(CommandStatus::SUCCESS)
    }
}

/// Records invocations and answers with scripted statuses.
///
/// Commands without a scripted status succeed. Scripting is keyed by the
/// rendered command line, e.g. `"git commit -m v1.2.4"`.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Vec<Invocation>,
    statuses: HashMap<String, CommandStatus>,
    unspawnable: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`.
    pub fn fail_with(mut self, command: &str, code: i32) -> Self {
        self.statuses
            .insert(command.to_string(), CommandStatus::from_code(code));
        self
    }

    /// Make `command` fail to start, as if the program were missing.
    pub fn unspawnable(mut self, command: &str) -> Self {
        self.unspawnable.push(command.to_string());
        self
    }

    /// Every invocation received so far, in order.
    pub fn calls(&self) -> &[Invocation] {
        &self.calls
    }

    /// Rendered command lines received so far, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandStatus> {
        self.calls.push(invocation.clone());
        let line = invocation.to_string();

        if self.unspawnable.contains(&line) {
            return Err(Error::Spawn {
                command: line,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }

        Ok(self
            .statuses
            .get(&line)
            .copied()
            .unwrap_or(CommandStatus::SUCCESS))
    }
}

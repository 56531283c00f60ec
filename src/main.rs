//! # Flutter Release CLI
//!
//! Binary entry point for `flutter-release`. It parses arguments with `clap`,
//! runs the release and turns the outcome into an exit status:
//!
//! - `0` when the release ran to the end (even if some commands failed and the
//!   default continue-on-failure policy was in effect).
//! - `1` when the version was rejected or the release stopped on an error.
//! - `2` for command-line usage errors, reported by `clap`.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

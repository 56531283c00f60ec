//! CLI argument parsing and logging setup

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::WriteStyle;

use crate::commands;
use flutter_release::output::{ColorChoice, OutputConfig};

/// Flutter Release - bump, lock, commit, tag and push a package release
#[derive(Parser, Debug)]
#[command(name = "flutter-release")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    release: commands::release::ReleaseArgs,

    /// Colorize output
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the release
    pub fn execute(self) -> Result<ExitCode> {
        let output = OutputConfig::from_env_and_choice(self.color);
        init_logging(&self.log_level, &output);

        let code = commands::release::execute(self.release, &output)?;
        Ok(ExitCode::from(code))
    }
}

fn init_logging(filters: &str, output: &OutputConfig) {
    let style = if output.use_color {
        WriteStyle::Always
    } else {
        WriteStyle::Never
    };

    // A second initialization only happens in tests and is harmless.
    let _ = env_logger::Builder::new()
        .parse_filters(filters)
        .format_timestamp(None)
        .format_target(false)
        .write_style(style)
        .try_init();
}

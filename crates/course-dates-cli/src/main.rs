//! `course-dates` CLI — batch conversion and validation of course content
//! dates.
//!
//! ## Usage
//!
//! ```sh
//! # One-time migration: derive relative dates from stored absolute dates
//! course-dates convert --config src/courseConfig.yaml --content-dir src/content
//!
//! # Check that stored relative dates still resolve to the stored absolutes
//! course-dates validate --config src/courseConfig.yaml --content-dir src/content
//! ```
//!
//! Both passes print a human-readable summary to stdout. The exit status is
//! non-zero when any file fails to parse, and additionally for `validate`
//! when any recalculated date differs from its stored original.

mod cli;
mod content;
mod convert;
mod logging;
mod validate;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Dispatch to the selected pass. Returns whether the run was clean.
fn run(command: Command) -> Result<bool> {
    match command {
        Command::Convert(args) => {
            let summary = convert::run(&args)?;
            Ok(summary.errors == 0)
        }
        Command::Validate(args) => {
            let summary = validate::run(&args)?;
            Ok(summary.errors == 0 && summary.mismatches.is_empty())
        }
    }
}

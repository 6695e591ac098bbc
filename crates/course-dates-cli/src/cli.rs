use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Batch conversion and validation of course content dates.
#[derive(Parser)]
#[command(
    name = "course-dates",
    version,
    about = "Convert and validate relative dates in course content"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Derive relative_date fields from stored absolute dates (one-time migration).
    Convert(PassArgs),
    /// Re-resolve stored relative dates and diff them against the original absolutes.
    Validate(PassArgs),
}

/// Arguments shared by both passes.
#[derive(clap::Args)]
pub struct PassArgs {
    /// Path to the course configuration YAML file.
    #[arg(short, long, default_value = "src/courseConfig.yaml")]
    pub config: PathBuf,

    /// Root of the content tree (contains docs/lectures, docs/homeworks, exams).
    #[arg(long, default_value = "src/content")]
    pub content_dir: PathBuf,
}

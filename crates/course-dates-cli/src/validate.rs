//! The validate pass -- re-resolves stored relative dates and diff-checks
//! them against the original absolute values.
//!
//! Diagnostic only: collects and reports mismatches without mutating any
//! file, and compares instants (the same point in time in the course
//! timezone), not strings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use course_engine::{parse_absolute, resolve_date, CourseConfig};
use tracing::info;

use crate::cli::PassArgs;
use crate::content;

/// One field whose recalculated instant differs from the stored one, or
/// could not be recalculated at all.
#[derive(Debug)]
pub struct Mismatch {
    pub file: PathBuf,
    pub kind: &'static str,
    pub field: &'static str,
    pub original: String,
    pub recalculated: String,
}

/// Outcome of one validate run.
#[derive(Debug, Default)]
pub struct ValidateSummary {
    pub checked: usize,
    pub matching: usize,
    pub mismatches: Vec<Mismatch>,
    pub errors: usize,
}

pub fn run(args: &PassArgs) -> Result<ValidateSummary> {
    let config = CourseConfig::load(&args.config)
        .with_context(|| format!("Failed to load course config: {}", args.config.display()))?;
    let paths = content::discover(&args.content_dir)?;
    info!(files = paths.len(), "starting date validation");

    let mut summary = ValidateSummary::default();
    for path in &paths {
        let file = match content::load(path) {
            Ok(file) => file,
            Err(err) => {
                println!("Failed to parse {}: {err:#}", path.display());
                summary.errors += 1;
                continue;
            }
        };

        for field in file.kind.date_fields() {
            let (Some(absolute), Some(relative)) = (
                field.absolute(&file.record),
                field.relative(&file.record),
            ) else {
                continue;
            };
            summary.checked += 1;

            // Recalculate from the relative form; a resolution failure is
            // itself a finding, reported in place of the recalculated value.
            let recalculated = match resolve_date(relative, &config) {
                Ok(instant) => instant,
                Err(err) => {
                    summary.mismatches.push(Mismatch {
                        file: path.clone(),
                        kind: file.kind.label(),
                        field: field.name(),
                        original: absolute.clone(),
                        recalculated: format!("unresolvable: {err}"),
                    });
                    continue;
                }
            };

            let stored = match parse_absolute(absolute, &config) {
                Ok(instant) => instant,
                Err(err) => {
                    summary.mismatches.push(Mismatch {
                        file: path.clone(),
                        kind: file.kind.label(),
                        field: field.name(),
                        original: absolute.clone(),
                        recalculated: format!("stored value unparseable: {err}"),
                    });
                    continue;
                }
            };

            if stored.with_timezone(&Utc) == recalculated {
                summary.matching += 1;
            } else {
                summary.mismatches.push(Mismatch {
                    file: path.clone(),
                    kind: file.kind.label(),
                    field: field.name(),
                    original: absolute.clone(),
                    recalculated: recalculated.to_rfc3339_opts(SecondsFormat::Millis, true),
                });
            }
        }
    }

    print_report(&summary);
    Ok(summary)
}

fn print_report(summary: &ValidateSummary) {
    println!();
    println!("Date Validation Results:");
    println!("=======================");
    println!();

    if summary.mismatches.is_empty() {
        println!("All date conversions match!");
    } else {
        println!("Found {} mismatches:", summary.mismatches.len());
        println!();
        for mismatch in &summary.mismatches {
            println!("File: {}", mismatch.file.display());
            println!("Type: {}", mismatch.kind);
            println!("Field: {}", mismatch.field);
            println!("Original: {}", mismatch.original);
            println!("Recalculated: {}", mismatch.recalculated);
            println!("---");
        }
    }

    println!();
    println!("Summary:");
    println!("Total fields checked: {}", summary.checked);
    println!("Matching conversions: {}", summary.matching);
    println!("Mismatched conversions: {}", summary.mismatches.len());
    if summary.errors > 0 {
        println!("Files failed to parse: {}", summary.errors);
    }
}

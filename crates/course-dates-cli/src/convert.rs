//! The convert pass -- one-time migration of stored absolute dates into
//! relative form.
//!
//! For each record with an absolute date field and no relative counterpart,
//! derives the relative date and rewrites the file. Already-converted
//! records are left untouched and reported as skipped. A file that fails to
//! parse (or whose dates cannot be derived) is reported and skipped; the
//! run continues.

use anyhow::{Context, Result};
use course_engine::{derive_relative, parse_absolute, CourseConfig};
use tracing::{debug, info};

use crate::cli::PassArgs;
use crate::content::{self, ContentFile};

/// Outcome counts for one convert run.
#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub converted: usize,
    pub skipped: usize,
    pub errors: usize,
}

pub fn run(args: &PassArgs) -> Result<ConvertSummary> {
    let config = CourseConfig::load(&args.config)
        .with_context(|| format!("Failed to load course config: {}", args.config.display()))?;
    let paths = content::discover(&args.content_dir)?;
    info!(files = paths.len(), "starting date conversion");

    let mut summary = ConvertSummary::default();
    for path in &paths {
        let mut file = match content::load(path) {
            Ok(file) => file,
            Err(err) => {
                println!("Failed to parse {}: {err:#}", path.display());
                summary.errors += 1;
                continue;
            }
        };

        match convert_file(&mut file, &config) {
            Ok(true) => {
                content::save(&file)?;
                println!("Converted {}", path.display());
                summary.converted += 1;
            }
            Ok(false) => {
                debug!(path = %path.display(), "nothing to convert");
                println!(
                    "Skipped {} (already converted or no dates to convert)",
                    path.display()
                );
                summary.skipped += 1;
            }
            Err(err) => {
                println!("Failed to convert {}: {err:#}", path.display());
                summary.errors += 1;
            }
        }
    }

    println!();
    println!("Conversion summary:");
    println!("Converted: {}", summary.converted);
    println!("Skipped: {}", summary.skipped);
    println!("Errors: {}", summary.errors);

    Ok(summary)
}

/// Derive relative dates for every eligible field pair of one record.
/// Returns whether the record was modified.
fn convert_file(file: &mut ContentFile, config: &CourseConfig) -> Result<bool> {
    let mut modified = false;
    for field in file.kind.date_fields() {
        if field.relative(&file.record).is_some() {
            continue;
        }
        let Some(absolute) = field.absolute(&file.record).cloned() else {
            continue;
        };

        let local = parse_absolute(&absolute, config)
            .with_context(|| format!("Unparseable {} field: {absolute}", field.name()))?;
        let relative = derive_relative(local, config)
            .with_context(|| format!("Cannot derive relative {} from {absolute}", field.name()))?;

        debug!(
            field = field.name(),
            week = relative.week,
            "derived relative date"
        );
        field.set_relative(&mut file.record, relative);
        modified = true;
    }
    Ok(modified)
}

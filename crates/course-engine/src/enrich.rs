//! Content record enrichment -- derives absolute date fields from relative
//! ones at content-load time.
//!
//! A [`ContentRecord`] is the parsed frontmatter (or YAML body) of one
//! lecture, homework, or exam entry. Enrichment is a pure transform: for
//! each of the three (relative, absolute) field pairs, a present relative
//! field is resolved and its absolute counterpart overwritten; every other
//! field passes through untouched. No file I/O and no logging happen here.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::config::CourseConfig;
use crate::error::Result;
use crate::relative::RelativeDate;
use crate::resolver::resolve_date;

/// One content entry's date-bearing fields, plus everything else the
/// authoring layer owns (title, readings, notes, ...) carried opaquely.
///
/// Absolute fields are ISO-8601 strings; enrichment writes them as UTC
/// instants in `YYYY-MM-DDTHH:MM:SS.mmmZ` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Lecture/exam date, relative form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_date: Option<RelativeDate>,
    /// Homework release, relative form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_release: Option<RelativeDate>,
    /// Homework due, relative form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_due: Option<RelativeDate>,

    /// Lecture/exam date, absolute form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Homework release, absolute form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Homework due, absolute form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,

    /// All remaining authored fields, preserved in order.
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// Enrich a content record: resolve each present relative field and write
/// the corresponding absolute field, overwriting any prior value. Fields
/// without a present relative counterpart pass through unchanged.
///
/// # Errors
///
/// Propagates the first [`resolve_date`] failure. Enrichment of one record
/// is independent of every other record, so callers can report the failure
/// and continue their batch.
///
/// [`resolve_date`]: crate::resolver::resolve_date
pub fn enrich_record(record: &ContentRecord, config: &CourseConfig) -> Result<ContentRecord> {
    let mut enriched = record.clone();

    if let Some(relative) = &record.relative_date {
        enriched.date = Some(format_instant(relative, config)?);
    }
    if let Some(relative) = &record.relative_release {
        enriched.release = Some(format_instant(relative, config)?);
    }
    if let Some(relative) = &record.relative_due {
        enriched.due = Some(format_instant(relative, config)?);
    }

    Ok(enriched)
}

fn format_instant(relative: &RelativeDate, config: &CourseConfig) -> Result<String> {
    let instant = resolve_date(relative, config)?;
    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

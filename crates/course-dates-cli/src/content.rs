//! Content tree access for the offline passes.
//!
//! Locates lecture, homework, and exam records by directory convention,
//! splits Markdown frontmatter from body text, and reads/writes typed
//! records. Only the frontmatter block of a Markdown record is ever
//! rewritten; the body is preserved byte-for-byte.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use course_engine::{ContentRecord, RelativeDate};

/// Which kind of content record a file holds, by directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Lecture,
    Homework,
    Exam,
}

impl RecordKind {
    /// Classify a path by its directory components.
    pub fn from_path(path: &Path) -> Option<Self> {
        let has_component = |name: &str| path.components().any(|c| c.as_os_str() == name);
        if has_component("lectures") {
            Some(RecordKind::Lecture)
        } else if has_component("homeworks") {
            Some(RecordKind::Homework)
        } else if has_component("exams") {
            Some(RecordKind::Exam)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Lecture => "lecture",
            RecordKind::Homework => "homework",
            RecordKind::Exam => "exam",
        }
    }

    /// The (absolute, relative) date field pairs this kind carries.
    pub fn date_fields(self) -> &'static [DateField] {
        match self {
            RecordKind::Lecture | RecordKind::Exam => &[DateField::Date],
            RecordKind::Homework => &[DateField::Release, DateField::Due],
        }
    }
}

/// One (absolute, relative) field pair of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// `date` / `relative_date` (lectures and exams).
    Date,
    /// `release` / `relative_release` (homeworks).
    Release,
    /// `due` / `relative_due` (homeworks).
    Due,
}

impl DateField {
    /// Name of the absolute field, as authored.
    pub fn name(self) -> &'static str {
        match self {
            DateField::Date => "date",
            DateField::Release => "release",
            DateField::Due => "due",
        }
    }

    pub fn absolute(self, record: &ContentRecord) -> Option<&String> {
        match self {
            DateField::Date => record.date.as_ref(),
            DateField::Release => record.release.as_ref(),
            DateField::Due => record.due.as_ref(),
        }
    }

    pub fn relative(self, record: &ContentRecord) -> Option<&RelativeDate> {
        match self {
            DateField::Date => record.relative_date.as_ref(),
            DateField::Release => record.relative_release.as_ref(),
            DateField::Due => record.relative_due.as_ref(),
        }
    }

    pub fn set_relative(self, record: &mut ContentRecord, value: RelativeDate) {
        match self {
            DateField::Date => record.relative_date = Some(value),
            DateField::Release => record.relative_release = Some(value),
            DateField::Due => record.relative_due = Some(value),
        }
    }
}

/// On-disk representation of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Markdown/MDX with a `---`-delimited YAML frontmatter block.
    Markdown,
    /// A bare YAML document.
    Yaml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("md") | Some("mdx") => Some(FileFormat::Markdown),
            Some("yaml") | Some("yml") => Some(FileFormat::Yaml),
            _ => None,
        }
    }
}

/// A loaded content file: the typed record plus everything needed to write
/// it back unchanged apart from the frontmatter.
#[derive(Debug)]
pub struct ContentFile {
    pub path: PathBuf,
    pub kind: RecordKind,
    pub format: FileFormat,
    pub record: ContentRecord,
    /// Markdown body text (empty for YAML records), preserved verbatim.
    pub body: String,
}

/// Enumerate the content tree in deterministic order: lectures, homeworks,
/// then exams, each sorted by filename. Missing subdirectories are treated
/// as empty.
pub fn discover(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    paths.extend(list_dir(
        &content_dir.join("docs").join("lectures"),
        &["md", "mdx"],
    )?);
    paths.extend(list_dir(
        &content_dir.join("docs").join("homeworks"),
        &["md", "mdx"],
    )?);
    paths.extend(list_dir(&content_dir.join("exams"), &["yaml", "yml"])?);
    Ok(paths)
}

fn list_dir(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "content subdirectory missing, skipping");
        return Ok(Vec::new());
    }
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

/// Split a Markdown document into its frontmatter block and body.
///
/// Accepts `---\n<frontmatter>\n---\n<body>`; the body may be empty and the
/// trailing newline after the closing delimiter is optional.
pub fn split_frontmatter(text: &str) -> Result<(&str, &str)> {
    let rest = text
        .strip_prefix("---\n")
        .context("missing frontmatter: file does not start with ---")?;

    let mut search_from = 0;
    while let Some(found) = rest[search_from..].find("\n---") {
        let index = search_from + found;
        let after = &rest[index + 4..];
        if after.is_empty() {
            return Ok((&rest[..index + 1], ""));
        }
        if let Some(body) = after.strip_prefix('\n') {
            return Ok((&rest[..index + 1], body));
        }
        search_from = index + 1;
    }
    bail!("missing frontmatter: no closing --- delimiter")
}

/// Load and parse one content file.
pub fn load(path: &Path) -> Result<ContentFile> {
    let kind = RecordKind::from_path(path)
        .with_context(|| format!("Unrecognized content path: {}", path.display()))?;
    let format = FileFormat::from_path(path)
        .with_context(|| format!("Unrecognized file extension: {}", path.display()))?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let (record, body) = match format {
        FileFormat::Markdown => {
            let (frontmatter, body) = split_frontmatter(&raw)
                .with_context(|| format!("Invalid frontmatter in {}", path.display()))?;
            let record: ContentRecord = serde_yaml::from_str(frontmatter)
                .with_context(|| format!("Invalid frontmatter YAML in {}", path.display()))?;
            (record, body.to_string())
        }
        FileFormat::Yaml => {
            let record: ContentRecord = serde_yaml::from_str(&raw)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?;
            (record, String::new())
        }
    };

    Ok(ContentFile {
        path: path.to_path_buf(),
        kind,
        format,
        record,
        body,
    })
}

/// Write a content file back to disk, via a sibling temporary file and a
/// rename.
pub fn save(file: &ContentFile) -> Result<()> {
    let frontmatter = serde_yaml::to_string(&file.record)
        .with_context(|| format!("Failed to serialize record for {}", file.path.display()))?;
    let contents = match file.format {
        FileFormat::Markdown => format!("---\n{}---\n{}", frontmatter, file.body),
        FileFormat::Yaml => frontmatter,
    };

    let tmp = file.path.with_extension("tmp");
    fs::write(&tmp, contents)
        .with_context(|| format!("Failed to write file: {}", tmp.display()))?;
    fs::rename(&tmp, &file.path)
        .with_context(|| format!("Failed to replace file: {}", file.path.display()))?;
    Ok(())
}

//! Folder-level driver: discover pages, standardize each, write in place.
//!
//! Each page is handled independently. A failure on one page is recorded in
//! the [`Report`] and the run moves on to the next page.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::standardize::{StandardizedPage, standardize};
use crate::util::decode_page;

/// Suffix appended to a page's file name for its backup copy.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// Settings for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Folder whose `*.html` files are rewritten. Not searched recursively.
    pub dir: PathBuf,
    /// Appended to the file name to form the backup path.
    pub backup_suffix: String,
    /// Standardize and report without touching any file.
    pub dry_run: bool,
}

impl BatchOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the backup suffix.
    pub fn with_backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    /// Builder method to enable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            dry_run: false,
        }
    }
}

/// Result of processing one page.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "status", rename_all = "snake_case"))]
pub enum FileStatus {
    Updated {
        kind: String,
        title: String,
        /// Where the original was moved; `None` on a dry run.
        backup: Option<PathBuf>,
        violations: Vec<String>,
    },
    Failed {
        error: String,
    },
}

/// One line of the batch report.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Serialize))]
pub struct FileOutcome {
    pub path: PathBuf,
    #[cfg_attr(feature = "cli", serde(flatten))]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Updated { .. })
    }
}

/// Per-file outcomes of a batch run, in processing order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Serialize))]
pub struct Report {
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl Report {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// List the `*.html` files directly inside `dir`, sorted by path.
///
/// The extension match ignores case; backups (`page.html.bak`) never match.
pub fn discover_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            pages.push(entry.into_path());
        }
    }
    pages.sort();
    Ok(pages)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Backup location for `path`: the same name with `suffix` appended.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(OsString::from(suffix));
    PathBuf::from(name)
}

/// Standardize one file, then move the original aside and write the result.
///
/// The original is renamed to its backup path before anything is written, so
/// the backup exists whenever the original path has been replaced. An older
/// backup at that path is overwritten.
pub fn process_file(path: &Path, options: &BatchOptions) -> Result<(StandardizedPage, Option<PathBuf>)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;

    let bytes = fs::read(path).map_err(|e| Error::file(path, e))?;
    let page = standardize(&decode_page(&bytes), file_name)?;

    if options.dry_run {
        return Ok((page, None));
    }

    let backup = backup_path(path, &options.backup_suffix);
    fs::rename(path, &backup).map_err(|e| Error::file(&backup, e))?;
    fs::write(path, &page.html).map_err(|e| Error::file(path, e))?;
    Ok((page, Some(backup)))
}

/// Standardize every page in `options.dir`.
///
/// Only a failure to list the folder is returned as an error; per-page
/// failures are recorded in the report.
pub fn run(options: &BatchOptions) -> Result<Report> {
    let pages = discover_pages(&options.dir)?;
    tracing::info!(dir = %options.dir.display(), pages = pages.len(), "Discovered pages");

    let mut report = Report {
        dry_run: options.dry_run,
        files: Vec::with_capacity(pages.len()),
    };

    for path in pages {
        let status = match process_file(&path, options) {
            Ok((page, backup)) => {
                tracing::info!(path = %path.display(), kind = %page.kind, "Updated page");
                FileStatus::Updated {
                    kind: page.kind.to_string(),
                    title: page.title,
                    backup,
                    violations: page.violations.iter().map(|v| v.to_string()).collect(),
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to update page");
                FileStatus::Failed {
                    error: e.to_string(),
                }
            }
        };
        report.files.push(FileOutcome { path, status });
    }

    Ok(report)
}

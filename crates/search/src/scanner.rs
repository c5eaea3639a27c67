//! Recursive line scan for a search term.
//!
//! Walks the tree one file at a time. Files that can't be read are logged and
//! skipped; they never abort the scan.

use crate::types::{MatchLine, MatchSpan, SearchResultMap};
use notenab_core::config::AppConfig;
use notenab_core::{NabError, Result, LOG_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names never entered, at any depth below the root.
    pub ignore_dirs: Vec<String>,
    /// File-name suffixes never opened. The tool's own log is always
    /// skipped on top of these.
    pub excluded_extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore_dirs: vec!["venv".to_string()],
            excluded_extensions: vec![".py".to_string(), ".sh".to_string()],
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            ignore_dirs: config.ignore_dir_list(),
            excluded_extensions: config.excluded_extension_list(),
        }
    }

    fn is_ignored_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .ignore_dirs
                .iter()
                .any(|d| entry.file_name().to_string_lossy() == d.as_str())
    }

    fn is_excluded_file(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        name == LOG_FILE_NAME || self.excluded_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Canonical form of the root that was scanned.
    pub root: PathBuf,
    pub results: SearchResultMap,
    pub files_scanned: usize,
    /// Files and directories that could not be read.
    pub skipped: Vec<PathBuf>,
}

/// Scans every eligible file under `root` for `term`, case-insensitively.
pub fn scan(root: &Path, term: &str, options: &ScanOptions) -> Result<ScanReport> {
    if term.trim().is_empty() {
        return Err(NabError::EmptySearchTerm);
    }
    if !root.is_dir() {
        return Err(NabError::MissingDirectory(root.to_path_buf()));
    }

    let root = std::fs::canonicalize(root).map_err(|e| NabError::io(root, e))?;
    let needle: Vec<char> = term.chars().map(fold).collect();
    let mut report = ScanReport { root: root.clone(), ..Default::default() };

    let walker = WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !options.is_ignored_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("⚠️ Skipping unreadable entry: {}", e);
                if let Some(path) = e.path() {
                    report.skipped.push(path.to_path_buf());
                }
                continue;
            }
        };

        if !entry.file_type().is_file() || options.is_excluded_file(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        match scan_file(&path, &needle) {
            Ok(lines) => {
                report.files_scanned += 1;
                if !lines.is_empty() {
                    debug!("{} matching lines in {}", lines.len(), path.display());
                    report.results.insert(path, lines);
                }
            }
            Err(e) => {
                warn!("⚠️ Skipping {}: {}", path.display(), e);
                report.skipped.push(path);
            }
        }
    }

    info!(
        "🔍 '{}': {} files with matches out of {} scanned ({} skipped)",
        term,
        report.results.len(),
        report.files_scanned,
        report.skipped.len()
    );
    Ok(report)
}

fn scan_file(path: &Path, needle: &[char]) -> std::io::Result<Vec<MatchLine>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let lines = text
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let spans = spans_of(line, needle);
            (!spans.is_empty()).then(|| MatchLine {
                source_path: path.to_path_buf(),
                line_number: idx + 1,
                line_text: line.to_string(),
                match_spans: spans,
            })
        })
        .collect();

    Ok(lines)
}

/// Every non-overlapping occurrence of `term` in `line`, left to right,
/// ignoring case. Offsets count characters, not bytes.
pub fn find_spans(line: &str, term: &str) -> Vec<MatchSpan> {
    let needle: Vec<char> = term.chars().map(fold).collect();
    spans_of(line, &needle)
}

fn spans_of(line: &str, needle: &[char]) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    if needle.is_empty() {
        return spans;
    }

    let hay: Vec<char> = line.chars().map(fold).collect();
    let n = needle.len();
    let mut i = 0;
    while i + n <= hay.len() {
        if hay[i..i + n] == *needle {
            spans.push(MatchSpan { start: i, end: i + n });
            i += n;
        } else {
            i += 1;
        }
    }
    spans
}

/// One char in, one char out, so offsets in the folded line line up with the input line.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

//! Splits a flat text file into named notes.
//!
//! A note starts at a header line such as `nab : Groceries`. Where it ends
//! depends on the [`SegmentPolicy`].

use crate::types::{NoteMap, NoteRecord};
use notenab_core::{NabError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^nab\s*:\s*(.*)$").expect("header pattern compiles"));

/// Closes the open note under [`SegmentPolicy::ExplicitMarkerCloses`].
pub const END_MARKER: &str = "^^^";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// A note runs until the next header or the end of input.
    #[default]
    NextHeaderCloses,
    /// A note runs until a `^^^` line. Headers inside an open note are body text,
    /// and anything between a marker and the next header is dropped.
    ExplicitMarkerCloses,
}

impl FromStr for SegmentPolicy {
    type Err = NabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "next_header" | "a" => Ok(Self::NextHeaderCloses),
            "end_marker" | "b" => Ok(Self::ExplicitMarkerCloses),
            other => Err(NabError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SegmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NextHeaderCloses => write!(f, "next_header"),
            Self::ExplicitMarkerCloses => write!(f, "end_marker"),
        }
    }
}

/// Returns the note name when `line` is a header. The name may be empty.
pub fn header_name(line: &str) -> Option<String> {
    HEADER
        .captures(line.trim())
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string())
}

struct OpenNote<'a> {
    name: String,
    lines: Vec<&'a str>,
}

impl<'a> OpenNote<'a> {
    fn new(name: String) -> Self {
        Self { name, lines: Vec::new() }
    }

    fn push(&mut self, line: &'a str) {
        self.lines.push(line);
    }

    /// Body is the collected lines minus leading and trailing blank lines.
    fn close(self) -> NoteRecord {
        let body = match (
            self.lines.iter().position(|l| !l.trim().is_empty()),
            self.lines.iter().rposition(|l| !l.trim().is_empty()),
        ) {
            (Some(first), Some(last)) => self.lines[first..=last].join("\n"),
            _ => String::new(),
        };
        NoteRecord { name: self.name, body }
    }
}

/// Segments `text` into notes. Never fails: malformed input yields fewer notes.
///
/// A note still open at the end of input is kept under both policies.
pub fn segment(text: &str, policy: SegmentPolicy) -> NoteMap {
    let mut notes = NoteMap::default();
    let mut open: Option<OpenNote> = None;

    for line in text.lines() {
        match policy {
            SegmentPolicy::NextHeaderCloses => {
                if let Some(name) = header_name(line) {
                    if let Some(note) = open.take() {
                        notes.insert(note.close());
                    }
                    open = Some(OpenNote::new(name));
                } else if let Some(note) = open.as_mut() {
                    note.push(line);
                }
            }
            SegmentPolicy::ExplicitMarkerCloses => {
                if open.is_none() {
                    if let Some(name) = header_name(line) {
                        open = Some(OpenNote::new(name));
                    }
                } else if line.trim() == END_MARKER {
                    if let Some(note) = open.take() {
                        notes.insert(note.close());
                    }
                } else if let Some(note) = open.as_mut() {
                    note.push(line);
                }
            }
        }
    }

    if let Some(note) = open {
        debug!("Closing unterminated note '{}' at end of input", note.name);
        notes.insert(note.close());
    }

    notes
}

/// Reads `path` and segments it. Bytes that are not valid UTF-8 are replaced,
/// so only the read itself can fail.
pub fn segment_file(path: &Path, policy: SegmentPolicy) -> Result<NoteMap> {
    let bytes = std::fs::read(path).map_err(|e| NabError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    let notes = segment(&text, policy);
    debug!("Segmented {} into {} notes ({})", path.display(), notes.len(), policy);
    Ok(notes)
}

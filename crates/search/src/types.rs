use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Character range `[start, end)` of one occurrence within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchLine {
    pub source_path: PathBuf,
    /// 1-based
    pub line_number: usize,
    pub line_text: String,
    pub match_spans: Vec<MatchSpan>,
}

/// Absolute file path -> matching lines in file order.
pub type SearchResultMap = BTreeMap<PathBuf, Vec<MatchLine>>;

pub fn match_count(results: &SearchResultMap) -> usize {
    results.values().map(Vec::len).sum()
}

//! notenab Search - project-wide, case-insensitive line search
//!
//! - types: MatchLine, MatchSpan, SearchResultMap
//! - scanner: walks a tree and collects matching lines
//! - resolver: folds backup-mirror hits into their working copies
//! - render: terminal and JSON output

mod types;

pub mod render;
pub mod resolver;
pub mod scanner;

pub use resolver::DuplicateResolver;
pub use scanner::{find_spans, scan, ScanOptions, ScanReport};
pub use types::{match_count, MatchLine, MatchSpan, SearchResultMap};

use notenab_core::Result;
use notenab_core::state::AppState;

/// Scan `state.search_root` (or `root_override`) and resolve backup duplicates.
///
/// Returns the report with the raw map swapped for the resolved one.
pub fn search_project(
    state: &AppState,
    term: &str,
    root_override: Option<&std::path::Path>,
) -> Result<ScanReport> {
    let root = root_override.unwrap_or(state.search_root.as_path());
    let options = ScanOptions::from_config(&state.config);
    let mut report = scan(root, term, &options)?;

    let resolver = DuplicateResolver::new(state.backup_dir_name()).with_root(report.root.clone());
    let raw = std::mem::take(&mut report.results);
    report.results = resolver.resolve(raw);
    Ok(report)
}

//! Folds backup-mirror hits into their working copies.
//!
//! Notes are written twice, once to the notes directory and once to the backup
//! mirror, so a search usually finds each hit twice. Results are grouped by file
//! name: when any path in a group lies outside the mirror, only those paths are
//! kept. A group found only inside the mirror is kept whole.

use crate::types::SearchResultMap;
use notenab_core::path_utils::has_dir_component;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DuplicateResolver {
    mirror_dir: String,
    root: Option<PathBuf>,
}

impl Default for DuplicateResolver {
    fn default() -> Self {
        Self::new("backup")
    }
}

impl DuplicateResolver {
    pub fn new(mirror_dir: impl Into<String>) -> Self {
        Self { mirror_dir: mirror_dir.into(), root: None }
    }

    /// Only components below `root` count when deciding whether a path is in the mirror.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn is_shadow(&self, path: &Path) -> bool {
        has_dir_component(path, self.root.as_deref(), &self.mirror_dir)
    }

    /// Pure and idempotent; must only run on the map of a finished scan.
    pub fn resolve(&self, raw: SearchResultMap) -> SearchResultMap {
        let keep: HashSet<PathBuf> = {
            let canonical_names: HashSet<&OsStr> = raw
                .keys()
                .filter(|path| !self.is_shadow(path))
                .map(|path| group_name(path))
                .collect();

            raw.keys()
                .filter(|path| !self.is_shadow(path) || !canonical_names.contains(group_name(path)))
                .cloned()
                .collect()
        };

        let before = raw.len();
        let resolved: SearchResultMap = raw
            .into_iter()
            .filter(|(path, _)| keep.contains(path))
            .collect();

        debug!("Dropped {} backup duplicates", before - resolved.len());
        resolved
    }
}

fn group_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}

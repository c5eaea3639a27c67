use crate::Workspace;
use notenab_core::natural::sort_paths;
use notenab_core::{NabError, Result};
use std::path::PathBuf;

impl Workspace {
    /// `*.txt` files waiting in the input directory, in natural order.
    pub fn input_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(NabError::MissingDirectory(self.input_dir.clone()));
        }

        let entries = std::fs::read_dir(&self.input_dir)
            .map_err(|e| NabError::io(&self.input_dir, e))?;

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
            .collect();

        sort_paths(&mut files);
        Ok(files)
    }
}

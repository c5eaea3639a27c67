use crate::Workspace;
use notenab_core::{NabError, Result};
use tracing::debug;

impl Workspace {
    /// Ensure the notes, backup and input directories exist.
    pub fn ensure_structure(&self) -> Result<()> {
        for dir in [&self.notes_dir, &self.backup_dir, &self.input_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| NabError::io(dir, e))?;
                debug!("Created {}", dir.display());
            }
        }
        Ok(())
    }
}

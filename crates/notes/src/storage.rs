use crate::{NoteMap, NoteRecord, Workspace};
use notenab_core::{NabError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Writes `<name>.txt` holding exactly `body` into `notes_dir`, then the same
/// bytes into `backup_dir`.
///
/// Both directories must already exist; if either is missing nothing is
/// written. A failed backup write leaves the primary file in place.
pub fn write_note(
    name: &str,
    body: &str,
    notes_dir: &Path,
    backup_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    for dir in [notes_dir, backup_dir] {
        if !dir.is_dir() {
            return Err(NabError::MissingDirectory(dir.to_path_buf()));
        }
    }

    let file_name = note_file_name(name)?;
    let note_file = notes_dir.join(&file_name);
    let backup_file = backup_dir.join(&file_name);

    std::fs::write(&note_file, body).map_err(|e| NabError::io(&note_file, e))?;
    std::fs::write(&backup_file, body).map_err(|e| NabError::io(&backup_file, e))?;

    info!("💾 Note '{}' saved", name);
    Ok((note_file, backup_file))
}

/// `<name>.txt`, provided it stays a single path component.
fn note_file_name(name: &str) -> Result<String> {
    let file_name = format!("{}.txt", name);
    let mut components = Path::new(&file_name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == file_name.as_str()
    );
    if !single || name.contains(['/', '\\', '\0']) {
        return Err(NabError::InvalidNoteName(name.to_string()));
    }
    Ok(file_name)
}

/// Writes every note in natural name order. Names are all checked before the
/// first write. Stops at the first I/O failure; notes written before it stay
/// on disk.
pub fn write_notes(notes: &NoteMap, notes_dir: &Path, backup_dir: &Path) -> Result<Vec<PathBuf>> {
    let records = notes.sorted();
    for record in &records {
        note_file_name(&record.name)?;
    }

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let (note_file, _) = write_note(&record.name, &record.body, notes_dir, backup_dir)?;
        written.push(note_file);
    }
    info!("💾 Saved {} notes to {}", written.len(), notes_dir.display());
    Ok(written)
}

impl Workspace {
    pub fn save_note(&self, record: &NoteRecord) -> Result<(PathBuf, PathBuf)> {
        write_note(&record.name, &record.body, &self.notes_dir, &self.backup_dir)
    }

    pub fn save_notes(&self, notes: &NoteMap) -> Result<Vec<PathBuf>> {
        write_notes(notes, &self.notes_dir, &self.backup_dir)
    }
}

//! File management over a directory: listing, viewing, creating, deleting,
//! moving. Listings come back in natural order.

use notenab_core::natural::sort_paths;
use notenab_core::{NabError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_entries(dir, |p| p.is_file())
}

pub fn list_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    list_entries(dir, |p| p.is_dir())
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(NabError::MissingDirectory(dir.to_path_buf()));
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| NabError::io(dir, e))?
        .flatten()
        .map(|e| e.path())
        .filter(|p| keep(p))
        .collect();

    sort_paths(&mut entries);
    Ok(entries)
}

/// File contents with invalid UTF-8 replaced.
pub fn view_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(NabError::MissingFile(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|e| NabError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn create_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(NabError::MissingDirectory(dir.to_path_buf()));
    }
    let path = dir.join(name);
    if path.exists() {
        return Err(NabError::AlreadyExists(path));
    }
    std::fs::write(&path, content).map_err(|e| NabError::io(&path, e))?;
    info!("Created {}", path.display());
    Ok(path)
}

pub fn delete_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(NabError::MissingFile(path.to_path_buf()));
    }
    std::fs::remove_file(path).map_err(|e| NabError::io(path, e))?;
    info!("Deleted {}", path.display());
    Ok(())
}

/// Moves `path` into `target_dir`, keeping its file name.
pub fn move_file(path: &Path, target_dir: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(NabError::MissingFile(path.to_path_buf()));
    }
    if !target_dir.is_dir() {
        return Err(NabError::MissingDirectory(target_dir.to_path_buf()));
    }
    let Some(name) = path.file_name() else {
        return Err(NabError::MissingFile(path.to_path_buf()));
    };
    let destination = target_dir.join(name);

    if let Err(e) = std::fs::rename(path, &destination) {
        // rename cannot cross filesystems; fall back to copy + remove
        warn!("rename {} failed ({}), copying instead", path.display(), e);
        std::fs::copy(path, &destination).map_err(|e| NabError::io(&destination, e))?;
        std::fs::remove_file(path).map_err(|e| NabError::io(path, e))?;
    }

    info!("Moved {} -> {}", path.display(), destination.display());
    Ok(destination)
}

pub fn create_directory(parent: &Path, name: &str) -> Result<PathBuf> {
    if !parent.is_dir() {
        return Err(NabError::MissingDirectory(parent.to_path_buf()));
    }
    let dir = parent.join(name);
    if dir.exists() {
        return Err(NabError::AlreadyExists(dir));
    }
    std::fs::create_dir_all(&dir).map_err(|e| NabError::io(&dir, e))?;
    info!("Created directory {}", dir.display());
    Ok(dir)
}

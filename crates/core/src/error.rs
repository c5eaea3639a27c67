//! Error types shared by every notenab crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NabError {
    /// A directory the operation depends on is not there. Callers create
    /// directories up front; nothing is written once this is returned.
    #[error("Directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("File does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Search term must not be empty")]
    EmptySearchTerm,

    /// The note name cannot become a single file inside the notes directory.
    #[error("Invalid note name: {0:?}")]
    InvalidNoteName(String),

    #[error("Unknown segment policy: {0}")]
    UnknownPolicy(String),

    #[error("IO Error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, NabError>;

impl NabError {
    /// Wraps an io error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_names_the_path() {
        let e = NabError::MissingDirectory(PathBuf::from("/tmp/nowhere"));
        assert!(e.to_string().contains("/tmp/nowhere"));
    }

    #[test]
    fn io_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = NabError::io("notes/a.txt", inner);
        assert!(e.to_string().contains("notes/a.txt"));
        assert!(std::error::Error::source(&e).is_some());
    }
}

use crate::config::AppConfig;
use crate::path_utils::resolve_under;
use std::path::PathBuf;

/// Resolved locations the rest of the app works against.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub notes_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub input_dir: PathBuf,
    pub search_root: PathBuf,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let root = config.project_root.clone();

        Self {
            notes_dir: resolve_under(&root, &config.notes_dir),
            backup_dir: resolve_under(&root, &config.backup_dir),
            input_dir: resolve_under(&root, &config.input_dir),
            search_root: resolve_under(&root, &config.search_root),
            config,
        }
    }

    /// Name of the backup mirror directory, used to tell shadow search hits apart.
    pub fn backup_dir_name(&self) -> String {
        self.backup_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "backup".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_resolve_against_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(AppConfig::load_with_vars(dir.path(), Vec::new()).unwrap());

        assert_eq!(state.notes_dir, dir.path().join("notes"));
        assert_eq!(state.backup_dir, dir.path().join("backup"));
        assert_eq!(state.input_dir, dir.path().join("input"));
        assert_eq!(state.search_root, dir.path());
        assert_eq!(state.backup_dir_name(), "backup");
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "NOTENAB";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub notes_dir: String,

    pub backup_dir: String,

    pub input_dir: String,

    /// Where searches start when no root is given.
    pub search_root: String,

    /// `next_header` or `end_marker`.
    pub segment_policy: String,

    /// Comma-separated file-name suffixes the search never opens.
    pub excluded_extensions: String,

    /// Comma-separated directory names the search never enters.
    pub ignore_dirs: String,

    #[serde(skip)]
    pub project_root: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // 1. Try standard dotenv discovery from current dir
        if dotenvy::dotenv().is_err() {
            // 2. Fallback: the resolved NOTENAB_ROOT
            let path = crate::path_utils::get_app_root().join(".env");
            if path.exists() {
                let _ = dotenvy::from_path(&path);
            }
        }

        Self::load_from(&crate::path_utils::get_app_root())
    }

    /// Builds the config for an explicit project root, without touching `.env`.
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        Self::build(root, Environment::with_prefix(ENV_PREFIX))
    }

    /// Like [`AppConfig::load_from`], but `NOTENAB_*` overrides come from `vars`
    /// instead of the process environment.
    pub fn load_with_vars<I>(root: &Path, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars.into_iter().collect()));
        Self::build(root, env)
    }

    fn build(root: &Path, env: Environment) -> Result<Self, ConfigError> {
        let file_stem = root.join("notenab");

        let builder = Config::builder()
            .set_default("notes_dir", "notes")?
            .set_default("backup_dir", "backup")?
            .set_default("input_dir", "input")?
            .set_default("search_root", ".")?
            .set_default("segment_policy", "next_header")?
            .set_default("excluded_extensions", ".py,.sh")?
            .set_default("ignore_dirs", "venv")?
            .add_source(File::with_name(&file_stem.to_string_lossy()).required(false))
            .add_source(env);

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.project_root = root.to_path_buf();

        Ok(config)
    }

    pub fn excluded_extension_list(&self) -> Vec<String> {
        split_list(&self.excluded_extensions)
    }

    pub fn ignore_dir_list(&self) -> Vec<String> {
        split_list(&self.ignore_dirs)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_with_vars(dir.path(), Vec::new()).unwrap();

        assert_eq!(config.notes_dir, "notes");
        assert_eq!(config.backup_dir, "backup");
        assert_eq!(config.segment_policy, "next_header");
        assert_eq!(config.excluded_extension_list(), vec![".py", ".sh"]);
        assert_eq!(config.ignore_dir_list(), vec!["venv"]);
        assert_eq!(config.project_root, dir.path());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("notenab.toml"),
            "notes_dir = \"cards\"\nsegment_policy = \"end_marker\"\nignore_dirs = \"venv, .git\"\n",
        )
        .unwrap();

        let config = AppConfig::load_with_vars(dir.path(), Vec::new()).unwrap();
        assert_eq!(config.notes_dir, "cards");
        assert_eq!(config.segment_policy, "end_marker");
        assert_eq!(config.ignore_dir_list(), vec!["venv", ".git"]);
        assert_eq!(config.backup_dir, "backup");
    }

    #[test]
    fn vars_override_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notenab.toml"), "notes_dir = \"cards\"\n").unwrap();

        let vars = [("NOTENAB_NOTES_DIR".to_string(), "jotted".to_string())];
        let config = AppConfig::load_with_vars(dir.path(), vars).unwrap();
        assert_eq!(config.notes_dir, "jotted");
        assert_eq!(config.input_dir, "input");
    }

    #[test]
    fn list_splitting_drops_blanks() {
        assert_eq!(split_list(" .py, ,.sh,"), vec![".py", ".sh"]);
        assert!(split_list("").is_empty());
    }
}

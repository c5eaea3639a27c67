//! Path utilities for notenab
//!
//! Handles tilde expansion and resolving directories against the project root.

use std::path::{Component, Path, PathBuf};

/// Expands a leading tilde (~) to the user's home directory.
/// Examples:
/// "~/notes" -> "/home/alice/notes"
/// "/tmp/foo" -> "/tmp/foo" (no change)
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => format!("{}/{}", home_dir(), rest),
        None => path.to_string(),
    }
}

/// Helper to convert a potentially tilde-containing string into a PathBuf.
pub fn get_path(path: &str) -> PathBuf {
    PathBuf::from(expand_tilde(path))
}

/// Resolves the project root: NOTENAB_ROOT if set, else the current directory.
pub fn get_app_root() -> PathBuf {
    match std::env::var("NOTENAB_ROOT") {
        Ok(root) if !root.trim().is_empty() => get_path(root.trim()),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Resolves `path` against `root` unless it is already absolute.
/// `.` components are dropped, so `"."` resolves to `root` itself.
pub fn resolve_under(root: &Path, path: &str) -> PathBuf {
    let p = get_path(path);
    let joined = if p.is_absolute() { p } else { root.join(p) };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// True when any directory component between `root` and the file is named `dir_name`.
/// The file name itself is never considered.
pub fn has_dir_component(path: &Path, root: Option<&Path>, dir_name: &str) -> bool {
    let rel = root
        .and_then(|r| path.strip_prefix(r).ok())
        .unwrap_or(path);

    let Some(parent) = rel.parent() else {
        return false;
    };

    parent.components().any(|c| match c {
        Component::Normal(name) => name == dir_name,
        _ => false,
    })
}

fn home_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| ".".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/foo"), "/tmp/foo");
        assert_eq!(expand_tilde("notes"), "notes");
        assert_eq!(expand_tilde("a~b"), "a~b");
    }

    #[test]
    fn relative_paths_resolve_under_root() {
        let root = Path::new("/work");
        assert_eq!(resolve_under(root, "notes"), PathBuf::from("/work/notes"));
        assert_eq!(resolve_under(root, "/abs/backup"), PathBuf::from("/abs/backup"));
    }

    #[test]
    fn current_dir_components_are_dropped() {
        let root = Path::new("/work");
        assert_eq!(resolve_under(root, "."), PathBuf::from("/work"));
        assert_eq!(resolve_under(root, "./notes/./a"), PathBuf::from("/work/notes/a"));
        assert_eq!(resolve_under(Path::new("/work/."), "notes"), PathBuf::from("/work/notes"));
    }

    #[test]
    fn dir_component_ignores_file_name() {
        let p = Path::new("/root/backup/note.txt");
        assert!(has_dir_component(p, None, "backup"));
        assert!(!has_dir_component(Path::new("/root/backup"), None, "backup"));
        assert!(!has_dir_component(Path::new("/root/backups/note.txt"), None, "backup"));
    }

    #[test]
    fn dir_component_is_relative_to_root() {
        let root = Path::new("/home/me/backup/project");
        let canonical = Path::new("/home/me/backup/project/note.txt");
        let shadow = Path::new("/home/me/backup/project/backup/note.txt");
        assert!(!has_dir_component(canonical, Some(root), "backup"));
        assert!(has_dir_component(shadow, Some(root), "backup"));
    }
}

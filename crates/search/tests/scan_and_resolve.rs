use notenab_core::config::AppConfig;
use notenab_core::state::AppState;
use notenab_search::{match_count, scan, search_project, DuplicateResolver, MatchSpan, ScanOptions};
use std::fs;
use std::path::Path;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn finds_term_regardless_of_case() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", b"hello WORLD\n");

    let report = scan(dir.path(), "world", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 1);

    let (path, lines) = report.results.iter().next().unwrap();
    assert_eq!(path.file_name().unwrap(), "a.txt");
    assert_eq!(lines[0].line_text, "hello WORLD");
    assert_eq!(lines[0].match_spans, vec![MatchSpan { start: 6, end: 11 }]);
}

#[test]
fn venv_contents_are_never_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "venv/lib/site.txt", b"needle\n");
    write(dir.path(), "deep/nested/venv/pkg/readme.md", b"needle\n");
    write(dir.path(), "keep.txt", b"needle\n");

    let report = scan(dir.path(), "needle", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert!(report.results.keys().all(|p| !p.components().any(|c| c.as_os_str() == "venv")));
}

#[test]
fn own_source_and_launcher_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "note_nabber.py", b"needle\n");
    write(dir.path(), "run.sh", b"needle\n");
    write(dir.path(), "notes/needle.txt", b"needle\n");

    let report = scan(dir.path(), "needle", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.files_scanned, 1);
}

#[test]
fn invalid_utf8_does_not_lose_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bin.dat", b"\xff\xfe needle \xc3\n");

    let report = scan(dir.path(), "NEEDLE", &ScanOptions::default()).unwrap();
    assert_eq!(match_count(&report.results), 1);
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped_not_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.txt", b"needle\n");
    write(dir.path(), "locked.txt", b"needle\n");
    let locked = dir.path().join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let report = scan(dir.path(), "needle", &ScanOptions::default()).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    // Root ignores permission bits, so the locked file may still be read.
    assert!(report.results.len() + report.skipped.len() == 2);
    assert!(report.results.keys().any(|p| p.ends_with("good.txt")));
}

#[test]
fn backup_mirror_hits_fold_into_notes() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notes/groceries.txt", b"buy MILK\n");
    write(dir.path(), "backup/groceries.txt", b"buy MILK\n");
    write(dir.path(), "backup/archived.txt", b"old milk\n");

    let report = scan(dir.path(), "milk", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 3);

    let resolver = DuplicateResolver::default().with_root(report.root.clone());
    let resolved = resolver.resolve(report.results.clone());

    let mut names: Vec<String> = resolved
        .keys()
        .map(|p| p.strip_prefix(&report.root).unwrap().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, ["backup/archived.txt", "notes/groceries.txt"]);
    assert_eq!(resolver.resolve(resolved.clone()), resolved);
}

#[test]
fn search_project_uses_configured_root_and_resolves() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notes/a.txt", b"Alpha\n");
    write(dir.path(), "backup/a.txt", b"Alpha\n");

    let state = AppState::new(AppConfig::load_with_vars(dir.path(), Vec::new()).unwrap());
    let report = search_project(&state, "alpha", None).unwrap();

    assert_eq!(report.results.len(), 1);
    assert!(report.results.keys().next().unwrap().ends_with("notes/a.txt"));
}

#[test]
fn own_log_file_is_never_searched() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notenab.log", b"INFO Searching 'zebra' under /proj\n");
    write(dir.path(), "notes/animals.txt", b"zebra\n");

    let report = scan(dir.path(), "zebra", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert!(report.results.keys().all(|p| !p.ends_with("notenab.log")));

    let state = AppState::new(AppConfig::load_with_vars(dir.path(), Vec::new()).unwrap());
    let report = search_project(&state, "zebra", None).unwrap();
    assert_eq!(report.results.len(), 1);
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_searched() {
    let dir = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    write(outside.path(), "target.txt", b"needle\n");
    std::os::unix::fs::symlink(outside.path().join("target.txt"), dir.path().join("link.txt")).unwrap();

    let report = scan(dir.path(), "needle", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert!(report.results.keys().next().unwrap().ends_with("link.txt"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_reported_as_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.txt", b"needle\n");
    std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("dangling.txt")).unwrap();

    let report = scan(dir.path(), "needle", &ScanOptions::default()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.skipped.len(), 1);
}

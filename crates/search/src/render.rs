//! Terminal and JSON views of a result map. Files are listed in natural
//! order of their full path.

use crate::types::{match_count, MatchLine, MatchSpan, SearchResultMap};
use notenab_core::natural::sort_naturally_by;
use std::path::{Path, PathBuf};

/// ANSI color codes
mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD_YELLOW: &str = "\x1b[1;33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
}

pub fn sorted_paths(results: &SearchResultMap) -> Vec<&PathBuf> {
    let mut paths: Vec<&PathBuf> = results.keys().collect();
    sort_naturally_by(&mut paths, |p| p.to_string_lossy().to_string());
    paths
}

/// Wraps every span of `line` in `open`/`close`.
pub fn highlight(line: &str, spans: &[MatchSpan], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(line.len() + spans.len() * (open.len() + close.len()));
    let mut spans = spans.iter().peekable();
    let mut inside = false;

    for (idx, c) in line.chars().enumerate() {
        if inside && spans.peek().is_some_and(|s| s.end == idx) {
            out.push_str(close);
            inside = false;
            spans.next();
        }
        if !inside && spans.peek().is_some_and(|s| s.start == idx) {
            out.push_str(open);
            inside = true;
        }
        out.push(c);
    }
    if inside {
        out.push_str(close);
    }
    out
}

/// Colored listing for the terminal. Paths are shown relative to `root` when possible.
pub fn render_text(results: &SearchResultMap, term: &str, root: Option<&Path>) -> String {
    if results.is_empty() {
        return format!("{}No matches for '{}'.{}\n", color::DIM, term, color::RESET);
    }

    let mut out = format!(
        "{}Found {} matching lines in {} files for '{}'{}\n",
        color::DIM,
        match_count(results),
        results.len(),
        term,
        color::RESET
    );

    for path in sorted_paths(results) {
        let shown = root
            .and_then(|r| path.strip_prefix(r).ok())
            .unwrap_or(path.as_path());
        out.push_str(&format!("\n{}📄 {}{}\n", color::CYAN, shown.display(), color::RESET));

        for line in &results[path] {
            out.push_str(&format!(
                "  {:>4}: {}\n",
                line.line_number,
                highlight(&line.line_text, &line.match_spans, color::BOLD_YELLOW, color::RESET)
            ));
        }
    }
    out
}

/// Machine-readable output, same ordering as [`render_text`].
pub fn render_json(results: &SearchResultMap, term: &str) -> serde_json::Value {
    let files: Vec<serde_json::Value> = sorted_paths(results)
        .into_iter()
        .map(|path| {
            let matches: &Vec<MatchLine> = &results[path];
            serde_json::json!({
                "path": path.to_string_lossy(),
                "matches": matches,
            })
        })
        .collect();

    serde_json::json!({
        "success": true,
        "term": term,
        "file_count": results.len(),
        "match_count": match_count(results),
        "files": files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(path: &str, text: &str, spans: &[(usize, usize)]) -> MatchLine {
        MatchLine {
            source_path: PathBuf::from(path),
            line_number: 1,
            line_text: text.to_string(),
            match_spans: spans.iter().map(|&(start, end)| MatchSpan { start, end }).collect(),
        }
    }

    #[test]
    fn highlight_wraps_each_span() {
        let spans = [MatchSpan { start: 0, end: 2 }, MatchSpan { start: 4, end: 6 }];
        assert_eq!(highlight("abxxab", &spans, "[", "]"), "[ab]xx[ab]");
    }

    #[test]
    fn highlight_handles_adjacent_spans_and_line_end() {
        let spans = [MatchSpan { start: 0, end: 2 }, MatchSpan { start: 2, end: 4 }];
        assert_eq!(highlight("aaaa", &spans, "<", ">"), "<aa><aa>");
        let tail = [MatchSpan { start: 6, end: 11 }];
        assert_eq!(highlight("hello WORLD", &tail, "<", ">"), "hello <WORLD>");
    }

    #[test]
    fn highlight_uses_character_offsets() {
        let spans = [MatchSpan { start: 1, end: 2 }];
        assert_eq!(highlight("éé", &spans, "<", ">"), "é<é>");
    }

    #[test]
    fn paths_are_sorted_naturally() {
        let results: SearchResultMap = ["/r/file10.txt", "/r/file2.txt", "/r/File1.txt"]
            .into_iter()
            .map(|p| (PathBuf::from(p), vec![line(p, "x", &[(0, 1)])]))
            .collect();

        let order: Vec<String> = sorted_paths(&results)
            .into_iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        assert_eq!(order, ["/r/File1.txt", "/r/file2.txt", "/r/file10.txt"]);
    }

    #[test]
    fn text_output_mentions_relative_path() {
        let results: SearchResultMap =
            [(PathBuf::from("/r/notes/a.txt"), vec![line("/r/notes/a.txt", "hi there", &[(0, 2)])])]
                .into_iter()
                .collect();

        let text = render_text(&results, "hi", Some(Path::new("/r")));
        assert!(text.contains("notes/a.txt"));
        assert!(!text.contains("/r/notes"));
        assert!(text.contains("1 matching lines in 1 files"));
    }

    #[test]
    fn empty_results_say_so() {
        assert!(render_text(&SearchResultMap::new(), "zebra", None).contains("No matches"));
    }

    #[test]
    fn json_output_carries_counts_and_spans() {
        let results: SearchResultMap =
            [(PathBuf::from("/r/a.txt"), vec![line("/r/a.txt", "hello WORLD", &[(6, 11)])])]
                .into_iter()
                .collect();

        let json = render_json(&results, "world");
        assert_eq!(json["match_count"], 1);
        assert_eq!(json["files"][0]["path"], "/r/a.txt");
        assert_eq!(json["files"][0]["matches"][0]["line_text"], "hello WORLD");
        assert_eq!(json["files"][0]["matches"][0]["match_spans"][0]["start"], 6);
    }
}

//! Natural ordering for names that mix text and numbers.
//!
//! `"file2.txt"` sorts before `"file10.txt"`: digit runs compare by value,
//! everything else compares case-insensitively.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// A run of ASCII digits with leading zeros stripped.
///
/// Comparing by significant length first and then digit by digit gives the
/// integer ordering without parsing, so arbitrarily long runs never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(run: &str) -> Self {
        Self(run.trim_start_matches('0').to_string())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One piece of a [`NaturalKey`]. Declaration order matters: a number sorts
/// before text when the two meet at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Token {
    Number(Digits),
    Text(String),
}

/// Sort key made of alternating text and number tokens.
///
/// The key always starts and ends with a text token (possibly empty), so two
/// keys built from similarly shaped names line up token for token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Token>);

impl NaturalKey {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

pub fn natural_key(s: &str) -> NaturalKey {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = s.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !c.is_ascii_digit() {
            text.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }

        tokens.push(Token::Text(std::mem::take(&mut text).to_lowercase()));
        tokens.push(Token::Number(Digits::new(&s[start..end])));
    }

    tokens.push(Token::Text(text.to_lowercase()));
    NaturalKey(tokens)
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Sorts items in place by the natural key of a string view of each item.
pub fn sort_naturally_by<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> String,
{
    items.sort_by_cached_key(|item| natural_key(&key(item)));
}

/// Sorts paths by file name, the way listings are shown to the user.
pub fn sort_paths(paths: &mut [PathBuf]) {
    sort_naturally_by(paths, |p| file_name_lossy(p));
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(natural_cmp("file2.txt", "file10.txt"), Ordering::Less);
        assert_eq!(natural_cmp("note10", "note2"), Ordering::Greater);
        assert!("file10.txt" < "file2.txt");
    }

    #[test]
    fn text_compares_case_insensitively() {
        assert_eq!(natural_cmp("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(natural_cmp("beta", "Alpha"), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(natural_cmp("v007", "v7"), Ordering::Equal);
        assert_eq!(natural_cmp("v007", "v10"), Ordering::Less);
    }

    #[test]
    fn huge_digit_runs_do_not_overflow() {
        let small = "n99999999999999999999999999999999";
        let large = "n100000000000000000000000000000000";
        assert_eq!(natural_cmp(small, large), Ordering::Less);
    }

    #[test]
    fn key_shape_alternates_text_and_numbers() {
        let key = natural_key("10a");
        assert_eq!(
            key.tokens(),
            &[
                Token::Text(String::new()),
                Token::Number(Digits::new("10")),
                Token::Text("a".to_string()),
            ]
        );
    }

    #[test]
    fn number_sorts_before_text_at_same_position() {
        assert!(Token::Number(Digits::new("5")) < Token::Text(String::new()));
    }

    #[test]
    fn sorts_a_listing() {
        let mut names = vec![
            "note10.txt".to_string(),
            "Note2.txt".to_string(),
            "note1.txt".to_string(),
            "apple.txt".to_string(),
        ];
        sort_naturally_by(&mut names, |s| s.clone());
        assert_eq!(names, ["apple.txt", "note1.txt", "Note2.txt", "note10.txt"]);
    }

    #[test]
    fn sorts_paths_by_file_name() {
        let mut paths = vec![
            PathBuf::from("/z/file10.txt"),
            PathBuf::from("/a/file2.txt"),
        ];
        sort_paths(&mut paths);
        assert_eq!(paths[0], PathBuf::from("/a/file2.txt"));
    }
}

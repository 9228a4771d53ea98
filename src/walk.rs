//! Directory enumeration with glob-lite name matching.
//!
//! Enumeration is best-effort: unreadable directory entries and files that
//! vanish between listing and stat are warned about and skipped. Per-file
//! inspection elsewhere in the crate stays strict.

use std::path::Path;

use log::warn;
use regex::Regex;
use thiserror::Error;
use walkdir::WalkDir;

use crate::record::FileRecord;

/// Error compiling a caller-supplied glob pattern.
#[derive(Debug, Error)]
#[error("invalid glob pattern {pattern:?}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

/// Yield a [`FileRecord`] for every file under `root` whose name matches
/// `pattern` (`*`, `?` and `[seq]` wildcards), recursing when asked.
///
/// A `root` that is itself a file yields exactly its own record, pattern
/// regardless. Directories are traversed, not yielded.
pub fn walk(
    root: &Path,
    pattern: &str,
    recursive: bool,
) -> Result<impl Iterator<Item = FileRecord>, PatternError> {
    let matcher = compile_pattern(pattern)?;
    let depth = if recursive { usize::MAX } else { 1 };

    let entries = WalkDir::new(root).max_depth(depth).into_iter();
    Ok(entries.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                return None;
            }
        };
        if entry.file_type().is_dir() {
            return None;
        }
        if entry.depth() > 0 && !matcher.is_match(&entry.file_name().to_string_lossy()) {
            return None;
        }
        match FileRecord::stat(entry.path()) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("cannot stat {}: {err}", entry.path().display());
                None
            }
        }
    }))
}

/// Translate a glob-lite pattern into an anchored regex over file names.
fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            '[' => {
                translated.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    translated.push('^');
                }
                for c in chars.by_ref() {
                    translated.push(c);
                    if c == ']' {
                        break;
                    }
                }
            }
            c if r"\.+()|^${}]".contains(c) => {
                translated.push('\\');
                translated.push(c);
            }
            c => translated.push(c),
        }
    }
    translated.push('$');

    Regex::new(&translated).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"content").unwrap();
    }

    fn names(records: impl Iterator<Item = FileRecord>) -> Vec<String> {
        let mut names: Vec<String> = records
            .map(|r| {
                r.absolute_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walk_matches_pattern() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "b.txt");
        touch(dir.path(), "c.bin");

        let found = names(walk(dir.path(), "*.txt", false).unwrap());
        assert_eq!(found, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_walk_recursion_toggle() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.txt");
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "deep.txt");

        let flat = names(walk(dir.path(), "*.txt", false).unwrap());
        assert_eq!(flat, vec!["top.txt"]);

        let deep = names(walk(dir.path(), "*.txt", true).unwrap());
        assert_eq!(deep, vec!["deep.txt", "top.txt"]);
    }

    #[test]
    fn test_walk_file_root_yields_itself() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "only.bin");

        // The pattern does not apply to a file given directly.
        let found = names(walk(&dir.path().join("only.bin"), "*.txt", true).unwrap());
        assert_eq!(found, vec!["only.bin"]);
    }

    #[test]
    fn test_walk_question_mark_and_class() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "log1");
        touch(dir.path(), "log2");
        touch(dir.path(), "log10");

        assert_eq!(
            names(walk(dir.path(), "log?", false).unwrap()),
            vec!["log1", "log2"]
        );
        assert_eq!(
            names(walk(dir.path(), "log[12]", false).unwrap()),
            vec!["log1", "log2"]
        );
        assert_eq!(
            names(walk(dir.path(), "log[!1]", false).unwrap()),
            vec!["log2"]
        );
    }

    #[test]
    fn test_walk_dot_is_literal() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.rs");
        touch(dir.path(), "ars");

        assert_eq!(names(walk(dir.path(), "a.rs", false).unwrap()), vec!["a.rs"]);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(walk(dir.path(), "[unclosed", false).is_err());
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        touch(dir.path(), "file");

        let found = names(walk(dir.path(), "*", true).unwrap());
        assert_eq!(found, vec!["file"]);
    }
}

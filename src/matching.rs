//! Glob-style include/ignore pattern matching for file discovery.
//!
//! Patterns use shell conventions: `**` crosses directory boundaries, `*`
//! and `?` stop at them, `[seq]`/`[!seq]` are character classes. Matching is
//! case-insensitive, mirroring the documentation toolchain this validator
//! replaces.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use regex::Regex;

use crate::error::ValidationError;

lazy_static::lazy_static! {
    static ref PATTERN_CACHE: Mutex<HashMap<String, Regex>> = Mutex::new(HashMap::new());
}

/// Translates a glob pattern into an anchored regex pattern.
pub fn translate_pattern(pattern: &str) -> String {
    let mut regex = String::from("(?i)^");
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    // `**/` matches zero or more leading directories
                    regex.push_str("(?:[^/]+/)*");
                    i += 3;
                } else {
                    regex.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                regex.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                regex.push_str("[^/]");
                i += 1;
            }
            '[' => {
                // Find the closing bracket, allowing `]` as the first member
                let mut j = i + 1;
                if matches!(chars.get(j), Some('!') | Some('^')) {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }

                if j >= chars.len() {
                    // Unterminated class, treat `[` literally
                    regex.push_str("\\[");
                    i += 1;
                } else {
                    regex.push('[');
                    let mut k = i + 1;
                    if matches!(chars.get(k), Some('!') | Some('^')) {
                        regex.push('^');
                        k += 1;
                    }
                    while k < j {
                        regex.push(chars[k]);
                        k += 1;
                    }
                    regex.push(']');
                    i = j + 1;
                }
            }
            c => {
                if "\\.^$+{}|()".contains(c) {
                    regex.push('\\');
                }
                regex.push(c);
                i += 1;
            }
        }
    }

    regex.push('$');
    regex
}

/// Compiles a glob pattern, caching the resulting regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex, ValidationError> {
    let mut cache = PATTERN_CACHE.lock().unwrap();
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(&translate_pattern(pattern)).map_err(|source| {
        ValidationError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    cache.insert(pattern.to_string(), regex.clone());
    Ok(regex)
}

/// Tests a single path string against a glob pattern.
pub fn pattern_match(name: &str, pattern: &str) -> Result<bool, ValidationError> {
    Ok(compile_pattern(pattern)?.is_match(name))
}

/// Normalizes a path to forward slashes so patterns behave the same on
/// every platform.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Collects the files under `root` that match some include pattern and no
/// ignore pattern. An empty include list means `**`. Results are sorted for
/// deterministic output.
pub fn get_matching_files(
    root: &Path,
    include_patterns: &[String],
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>, ValidationError> {
    let includes: Vec<Regex> = if include_patterns.is_empty() {
        vec![compile_pattern("**")?]
    } else {
        include_patterns
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<_, _>>()?
    };
    let ignores: Vec<Regex> = ignore_patterns
        .iter()
        .map(|p| compile_pattern(p))
        .collect::<Result<_, _>>()?;

    let mut files = Vec::new();
    walk(root, root, &includes, &ignores, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(
    dir: &Path,
    root: &Path,
    includes: &[Regex],
    ignores: &[Regex],
    files: &mut Vec<PathBuf>,
) -> Result<(), ValidationError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, root, includes, ignores, files)?;
        } else if path.is_file() {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            let name = normalize_path(relative);
            if includes.iter().any(|re| re.is_match(&name))
                && !ignores.iter().any(|re| re.is_match(&name))
            {
                files.push(path);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn translates_basic_patterns() {
        assert_eq!(translate_pattern("*.md"), "(?i)^[^/]*\\.md$");
        assert_eq!(translate_pattern("**"), "(?i)^.*$");
        assert_eq!(translate_pattern("**/*.md"), "(?i)^(?:[^/]+/)*[^/]*\\.md$");
        assert_eq!(translate_pattern("[!abc].md"), "(?i)^[^abc]\\.md$");
    }

    #[test]
    fn matches_paths_case_insensitively() {
        assert!(pattern_match("index.md", "*.md").unwrap());
        assert!(pattern_match("INDEX.MD", "*.md").unwrap());
        assert!(pattern_match("docs/api/user.md", "**/*.md").unwrap());
        assert!(!pattern_match("docs/api/user.md", "*.md").unwrap());
        assert!(pattern_match("includes/snippets/user.md", "**/includes/**").unwrap());
    }

    #[test]
    fn discovers_files_with_ignores() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("api-reference/beta")).unwrap();
        fs::create_dir_all(root.join("includes")).unwrap();
        fs::write(root.join("index.md"), "content").unwrap();
        fs::write(root.join("api-reference/beta/user.md"), "content").unwrap();
        fs::write(root.join("includes/disclaimer.md"), "content").unwrap();
        fs::write(root.join("notes.txt"), "content").unwrap();

        let files = get_matching_files(
            root,
            &["**/*.md".to_string()],
            &["includes/**".to_string()],
        )
        .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("index.md")));
        assert!(files.iter().any(|p| p.ends_with("user.md")));
    }
}

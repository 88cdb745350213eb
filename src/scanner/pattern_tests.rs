use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

fn tree(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
    dir
}

fn pattern_in(dir: &TempDir, pattern: &str) -> GlobPattern {
    let full = format!("{}/{pattern}", dir.path().display());
    GlobPattern::new(&full).unwrap()
}

fn names(dir: &TempDir, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn walk_root(pattern: &GlobPattern) -> &Path {
    match &pattern.kind {
        PatternKind::Literal(path) => path,
        PatternKind::Glob { root, .. } => root,
    }
}

#[test]
fn root_is_literal_prefix() {
    let pattern = GlobPattern::new("src/lib/**/*.js").unwrap();
    assert_eq!(walk_root(&pattern), Path::new("src/lib"));
    assert_eq!(pattern.as_str(), "src/lib/**/*.js");
}

#[test]
fn root_of_bare_glob_is_empty() {
    let pattern = GlobPattern::new("*.js").unwrap();
    assert_eq!(walk_root(&pattern), Path::new(""));
}

#[test]
fn root_of_absolute_glob() {
    let pattern = GlobPattern::new("/*.js").unwrap();
    assert_eq!(walk_root(&pattern), Path::new("/"));
}

#[test]
fn invalid_glob_is_rejected() {
    let err = GlobPattern::new("src/[abc").unwrap_err();
    assert!(matches!(err, HeaderGuardError::InvalidPattern { ref pattern, .. } if pattern == "src/[abc"));
}

#[test]
fn single_star_stays_in_directory() {
    let dir = tree(&["src/a.js", "src/b.py", "src/nested/c.js"]);

    let files = pattern_in(&dir, "src/*.js").expand();

    assert_eq!(names(&dir, &files), vec!["src/a.js"]);
}

#[test]
fn double_star_descends() {
    let dir = tree(&["src/a.js", "src/nested/deep/c.js", "src/nested/d.ts"]);

    let files = pattern_in(&dir, "src/**/*.js").expand();

    assert_eq!(names(&dir, &files), vec!["src/a.js", "src/nested/deep/c.js"]);
}

#[test]
fn brace_alternatives() {
    let dir = tree(&["a.js", "b.ts", "c.py"]);

    let files = pattern_in(&dir, "*.{js,ts}").expand();

    assert_eq!(names(&dir, &files), vec!["a.js", "b.ts"]);
}

#[test]
fn glob_in_middle_segment() {
    let dir = tree(&["pkg-a/index.js", "pkg-b/index.js", "other/index.js"]);

    let files = pattern_in(&dir, "pkg-*/index.js").expand();

    assert_eq!(names(&dir, &files), vec!["pkg-a/index.js", "pkg-b/index.js"]);
}

#[test]
fn literal_file_pattern() {
    let dir = tree(&["src/a.js"]);

    let files = pattern_in(&dir, "src/a.js").expand();

    assert_eq!(names(&dir, &files), vec!["src/a.js"]);
}

#[test]
fn literal_directory_is_not_a_target() {
    let dir = tree(&["src/a.js"]);

    assert!(pattern_in(&dir, "src").expand().is_empty());
}

#[test]
fn missing_root_matches_nothing() {
    let dir = tree(&[]);

    assert!(pattern_in(&dir, "missing/**/*.js").expand().is_empty());
}

#[test]
fn directories_are_never_matched() {
    let dir = tree(&["lib.js/inner.txt"]);

    assert!(pattern_in(&dir, "*.js").expand().is_empty());
}

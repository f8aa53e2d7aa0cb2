//! File-name predicates for locating accessibility outputs, plus directory scans built on them.
//!
//! The predicates are pure so the naming rules can be tested without touching the disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    file_name.rsplit_once('.')
}

fn extension_matches(actual: &str, expected: &str) -> bool {
    actual.eq_ignore_ascii_case(expected.trim_start_matches('.'))
}

/// True for `<identifier><chain letter>.<extension>` with exactly one ASCII letter
/// after the identifier. Identifier and extension compare case-insensitively.
pub fn is_chain_file(file_name: &str, identifier: &str, extension: &str) -> bool {
    let Some((stem, ext)) = split_extension(file_name) else {
        return false;
    };
    if !extension_matches(ext, extension) || identifier.is_empty() {
        return false;
    }
    let Some(prefix) = stem.get(..identifier.len()) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case(identifier) {
        return false;
    }
    let mut chain = stem[identifier.len()..].chars();
    matches!((chain.next(), chain.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// True for `<identifier>.<extension>`, both compared case-insensitively.
pub fn is_complex_file(file_name: &str, identifier: &str, extension: &str) -> bool {
    split_extension(file_name).is_some_and(|(stem, ext)| {
        !identifier.is_empty()
            && stem.eq_ignore_ascii_case(identifier)
            && extension_matches(ext, extension)
    })
}

/// True for any non-hidden file carrying `extension`.
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    split_extension(file_name)
        .is_some_and(|(stem, ext)| !stem.is_empty() && extension_matches(ext, extension))
}

/// Lists regular files in `dir` (non-recursive) whose names satisfy `predicate`, sorted by name.
pub fn find_files(dir: &Path, predicate: impl Fn(&str) -> bool) -> io::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if predicate(name) {
                matches.push(path);
            }
        }
    }
    matches.sort();
    Ok(matches)
}

pub fn find_chain_files(dir: &Path, identifier: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    find_files(dir, |name| is_chain_file(name, identifier, extension))
}

/// Returns the first complex file by name when several differ only in case.
pub fn find_complex_file(
    dir: &Path,
    identifier: &str,
    extension: &str,
) -> io::Result<Option<PathBuf>> {
    Ok(find_files(dir, |name| is_complex_file(name, identifier, extension))?
        .into_iter()
        .next())
}

pub fn find_accessibility_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    find_files(dir, |name| has_extension(name, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn chain_file_requires_exactly_one_trailing_letter() {
        assert!(is_chain_file("1ABCA.int", "1ABC", "int"));
        assert!(is_chain_file("1abcb.int", "1ABC", "int"));
        assert!(is_chain_file("1ABCz.INT", "1abc", ".int"));

        assert!(!is_chain_file("1ABC.int", "1ABC", "int"));
        assert!(!is_chain_file("1ABCAB.int", "1ABC", "int"));
        assert!(!is_chain_file("1ABC1.int", "1ABC", "int"));
        assert!(!is_chain_file("1ABC_A.int", "1ABC", "int"));
    }

    #[test]
    fn chain_file_rejects_other_identifiers_and_extensions() {
        assert!(!is_chain_file("2XYZA.int", "1ABC", "int"));
        assert!(!is_chain_file("1ABCA.rsa", "1ABC", "int"));
        assert!(!is_chain_file("1ABCA", "1ABC", "int"));
        assert!(!is_chain_file("A.int", "", "int"));
        assert!(!is_chain_file("1AB.int", "1ABC", "int"));
    }

    #[test]
    fn chain_file_handles_non_ascii_names_without_panicking() {
        assert!(!is_chain_file("1Ä.int", "1A", "int"));
        assert!(!is_chain_file("é.int", "1ABC", "int"));
    }

    #[test]
    fn complex_file_matches_identifier_exactly() {
        assert!(is_complex_file("1ABC.rsa", "1abc", "rsa"));
        assert!(is_complex_file("1abc.RSA", "1ABC", "rsa"));
        assert!(!is_complex_file("1ABCA.rsa", "1ABC", "rsa"));
        assert!(!is_complex_file("1ABC.asa", "1ABC", "rsa"));
    }

    #[test]
    fn has_extension_ignores_hidden_files() {
        assert!(has_extension("anything.rsa", "rsa"));
        assert!(has_extension("1ABCA.RSA", "rsa"));
        assert!(!has_extension(".rsa", "rsa"));
        assert!(!has_extension("1ABC.log", "rsa"));
    }

    #[test]
    fn find_chain_files_scans_directory_in_name_order() {
        let dir = tempdir().unwrap();
        for name in ["1ABCB.int", "1abca.int", "1ABC.int", "1ABCAB.int", "1ABCA.rsa"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("1ABCC.int")).unwrap();

        let found = find_chain_files(dir.path(), "1ABC", "int").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["1ABCB.int", "1abca.int"]);
    }

    #[test]
    fn find_complex_file_returns_none_when_absent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("9XYZ.rsa"), "").unwrap();
        assert_eq!(find_complex_file(dir.path(), "1ABC", "rsa").unwrap(), None);
        assert!(find_complex_file(dir.path(), "9xyz", "rsa").unwrap().is_some());
    }

    #[test]
    fn find_files_propagates_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = find_accessibility_files(&missing, "rsa").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

//! Comparing many file pairs at once.
//!
//! Comparisons are independent, so a batch can be spread over the rayon
//! thread pool. Results always come back in input order, and one failing
//! pair never affects the others.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use linedelta_types::LineSequence;

use crate::comparator::Comparison;
use crate::error::{SdkError, SdkResult};
use crate::source::{label_for, read_lines};

/// Two versions of one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePair {
    /// Path relative to the compared roots.
    pub name: String,
    pub before: PathBuf,
    pub after: PathBuf,
}

impl FilePair {
    pub fn new(name: impl Into<String>, before: impl Into<PathBuf>, after: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Files of two directory snapshots, matched by relative path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryPairing {
    /// Files present in both snapshots, sorted by relative path.
    pub pairs: Vec<FilePair>,
    /// Relative paths present only in the "before" snapshot.
    pub only_before: Vec<String>,
    /// Relative paths present only in the "after" snapshot.
    pub only_after: Vec<String>,
}

/// Match the regular files below two directories by relative path.
pub fn pair_directories(before: &Path, after: &Path) -> SdkResult<DirectoryPairing> {
    let before_files = relative_files(before)?;
    let after_files = relative_files(after)?;

    let pairs = before_files
        .intersection(&after_files)
        .map(|rel| FilePair::new(rel.display().to_string(), before.join(rel), after.join(rel)))
        .collect();
    let only_before = before_files
        .difference(&after_files)
        .map(|rel| rel.display().to_string())
        .collect();
    let only_after = after_files
        .difference(&before_files)
        .map(|rel| rel.display().to_string())
        .collect();

    Ok(DirectoryPairing {
        pairs,
        only_before,
        only_after,
    })
}

fn relative_files(root: &Path) -> SdkResult<BTreeSet<PathBuf>> {
    if !root.is_dir() {
        return Err(SdkError::NotADirectory(root.display().to_string()));
    }
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.insert(rel.to_path_buf());
        }
    }
    debug!(root = %root.display(), files = files.len(), "scanned directory");
    Ok(files)
}

/// Compare one pair of files without caching.
pub fn compare_pair(pair: &FilePair) -> SdkResult<Comparison> {
    let source: LineSequence = read_lines(&pair.before)?;
    let target: LineSequence = read_lines(&pair.after)?;
    let report = linedelta_diff::compare(&label_for(&pair.before), &source, &label_for(&pair.after), &target);
    Ok(Comparison::from_report(report))
}

/// Compare every pair, in parallel when `parallel` is set.
pub fn compare_batch(pairs: &[FilePair], parallel: bool) -> Vec<SdkResult<Comparison>> {
    let results: Vec<SdkResult<Comparison>> = if parallel {
        pairs.par_iter().map(compare_pair).collect()
    } else {
        pairs.iter().map(compare_pair).collect()
    };

    for (pair, result) in pairs.iter().zip(&results) {
        if let Err(e) = result {
            warn!(file = %pair.name, "comparison failed: {}", e);
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use linedelta_types::DiffSummary;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    fn snapshots() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let before = dir.path().join("before");
        let after = dir.path().join("after");
        write(&before, "a.txt", "one\ntwo\nthree\n");
        write(&after, "a.txt", "one\nthree\n");
        write(&before, "src/Foo.java", "class Foo {\n}\n");
        write(&after, "src/Foo.java", "class Foo {\nint x;\n}\n");
        write(&before, "same.txt", "unchanged\n");
        write(&after, "same.txt", "unchanged\n");
        write(&before, "removed.txt", "bye\n");
        write(&after, "added.txt", "hi\n");
        (dir, before, after)
    }

    #[test]
    fn pairs_by_relative_path() {
        let (_dir, before, after) = snapshots();
        let pairing = pair_directories(&before, &after).unwrap();
        let names: Vec<&str> = pairing.pairs.iter().map(|p| p.name.as_str()).collect();
        let foo = Path::new("src").join("Foo.java").display().to_string();
        assert_eq!(names, vec!["a.txt", "same.txt", foo.as_str()]);
        assert_eq!(pairing.only_before, vec!["removed.txt".to_string()]);
        assert_eq!(pairing.only_after, vec!["added.txt".to_string()]);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = pair_directories(&dir.path().join("nope"), dir.path()).unwrap_err();
        assert!(matches!(err, SdkError::NotADirectory(_)));
    }

    #[test]
    fn batch_results_follow_input_order() {
        let (_dir, before, after) = snapshots();
        let pairing = pair_directories(&before, &after).unwrap();
        for parallel in [true, false] {
            let results = compare_batch(&pairing.pairs, parallel);
            let summaries: Vec<DiffSummary> =
                results.into_iter().map(|r| r.unwrap().summary).collect();
            assert_eq!(
                summaries,
                vec![
                    DiffSummary { additions: 0, deletions: 1, modifications: 0 },
                    DiffSummary::default(),
                    DiffSummary { additions: 1, deletions: 0, modifications: 0 },
                ]
            );
        }
    }

    #[test]
    fn failing_pair_does_not_affect_others() {
        let (dir, before, after) = snapshots();
        let pairs = vec![
            FilePair::new("a.txt", before.join("a.txt"), after.join("a.txt")),
            FilePair::new("ghost.txt", dir.path().join("ghost.txt"), after.join("a.txt")),
            FilePair::new("same.txt", before.join("same.txt"), after.join("same.txt")),
        ];
        let results = compare_batch(&pairs, true);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SdkError::NotFound(_))));
        assert!(results[2].as_ref().unwrap().is_identical());
    }
}

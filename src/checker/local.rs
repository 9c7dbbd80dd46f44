// src/checker/local.rs
// =============================================================================
// Checks targets that point at files next to the document.
//
// A local target like `../guide.md#install` is split at the first `#`. The
// part after it is an anchor inside the target document and means nothing to
// the filesystem, so it is dropped. What remains is joined onto the
// document's folder and looked up on disk.
// =============================================================================

use std::path::Path;

use super::{FailureReason, TargetCheck};

// Returns everything before the first '#'
//
// Example:
//   "docs/install.md#linux" -> "docs/install.md"
//   "#top"                  -> ""
pub fn strip_fragment(target: &str) -> &str {
    match target.split_once('#') {
        Some((path, _fragment)) => path,
        None => target,
    }
}

// Checks a local target relative to the document's folder
//
// - Nothing left after stripping the fragment => Skipped (a same-page anchor)
// - Something exists at base_dir/path          => Success (file or directory)
// - Otherwise                                  => Failed
pub fn check_local(base_dir: &Path, target: &str) -> TargetCheck {
    let path = strip_fragment(target);
    if path.is_empty() {
        return TargetCheck::skipped();
    }

    let resolved = base_dir.join(path);
    tracing::debug!(link = %target, resolved = %resolved.display(), "checking local target");

    if resolved.exists() {
        TargetCheck::success()
    } else {
        TargetCheck::failed(FailureReason::Missing(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Verdict;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_fragment("a.md#b"), "a.md");
        assert_eq!(strip_fragment("#top"), "");
        assert_eq!(strip_fragment("a.md"), "a.md");
        assert_eq!(strip_fragment("a.md#b#c"), "a.md");
        assert_eq!(strip_fragment(""), "");
    }

    #[test]
    fn test_existing_file_is_success() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "hello").unwrap();

        let check = check_local(dir.path(), "./b.txt");
        assert_eq!(check.verdict, Verdict::Success);
        assert!(check.reason.is_none());
    }

    #[test]
    fn test_fragment_is_ignored_for_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("guide.md"), "# Guide").unwrap();

        let check = check_local(dir.path(), "guide.md#no-such-heading");
        assert_eq!(check.verdict, Verdict::Success);
    }

    #[test]
    fn test_directory_counts_as_existing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        assert_eq!(check_local(dir.path(), "docs").verdict, Verdict::Success);
        assert_eq!(check_local(dir.path(), "docs/").verdict, Verdict::Success);
    }

    #[test]
    fn test_missing_file_is_failed_with_resolved_path() {
        let dir = TempDir::new().unwrap();

        let check = check_local(dir.path(), "./missing.txt#intro");
        assert_eq!(check.verdict, Verdict::Failed);
        match check.reason {
            Some(FailureReason::Missing(path)) => {
                assert_eq!(path, dir.path().join("./missing.txt"));
            }
            other => panic!("expected Missing reason, got {:?}", other),
        }
    }

    #[test]
    fn test_anchor_only_is_skipped() {
        let dir = TempDir::new().unwrap();

        let check = check_local(dir.path(), "#top");
        assert_eq!(check.verdict, Verdict::Skipped);
        assert!(check.reason.is_none());
    }

    #[test]
    fn test_empty_target_is_skipped() {
        let dir = TempDir::new().unwrap();
        assert_eq!(check_local(dir.path(), "").verdict, Verdict::Skipped);
    }

    #[test]
    fn test_parent_directory_target() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("README.md"), "root").unwrap();

        let base = dir.path().join("docs");
        assert_eq!(check_local(&base, "../README.md").verdict, Verdict::Success);
        assert_eq!(check_local(&base, "../CHANGELOG.md").verdict, Verdict::Failed);
    }
}

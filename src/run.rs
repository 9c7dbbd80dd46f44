// src/run.rs
// =============================================================================
// The run coordinator: walks the documents given on the command line.
//
// For each document, in order:
// 1. Print a banner
// 2. Read the whole file as UTF-8 (failure here aborts the run)
// 3. Extract link/image targets
// 4. Check each target, printing its status line straight away
// 5. Fold the document's failures into the run totals
//
// Checks happen one after another; each request is awaited before the next
// target is looked at.
// =============================================================================

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::checker::{self, Checker, Verdict};
use crate::report::Reporter;

/// "No such file or directory". Returned when any link is broken.
pub const ENOENT: i32 = 2;

// Totals for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Documents processed
    pub files: usize,
    /// Targets checked, whatever their verdict
    pub links: usize,
    /// Documents with at least one failed target
    pub bad_files: usize,
    /// Failed targets across all documents
    pub bad_links: usize,
}

impl RunStats {
    // Called once per document, after all its targets were checked
    pub fn record_file(&mut self, file_bad_links: usize) {
        self.files += 1;
        if file_bad_links > 0 {
            self.bad_files += 1;
            self.bad_links += file_bad_links;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.bad_files > 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            ENOENT
        } else {
            0
        }
    }
}

// The folder relative targets are resolved against.
// `a.md` has an empty parent, which we treat as the current directory.
pub fn base_dir(document: &Path) -> &Path {
    match document.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

pub async fn run<W: Write>(
    documents: &[PathBuf],
    checker: &Checker,
    reporter: &mut Reporter<W>,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for document in documents {
        reporter.banner(document)?;

        let text = fs::read_to_string(document)
            .with_context(|| format!("Failed to read {}", document.display()))?;
        let base = base_dir(document);

        let extraction = checker::extract(&text);
        tracing::info!(
            document = %document.display(),
            targets = extraction.targets.len(),
            rendered_bytes = extraction.html.len(),
            "extracted targets"
        );

        let mut file_bad_links = 0;
        for target in &extraction.targets {
            let check = checker.check(base, target).await;
            stats.links += 1;

            if check.verdict == Verdict::Failed {
                file_bad_links += 1;
                if let Some(reason) = &check.reason {
                    tracing::debug!(link = %target, reason = %reason, "target failed");
                }
            }

            reporter.target(target, &check)?;
        }

        stats.record_file(file_bad_links);
    }

    reporter.summary(&stats)?;
    Ok(stats)
}

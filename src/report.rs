// src/report.rs
// =============================================================================
// Human-readable, colored output.
//
// Everything the user sees on stdout goes through the Reporter:
// - a banner when a document starts
// - one status line per target, written as soon as the target is checked
// - a short summary at the end
//
// The Reporter writes to any `impl Write`, which is stdout in main.rs and a
// plain Vec<u8> in tests.
// =============================================================================

use std::io::{self, Write};
use std::path::Path;

use owo_colors::OwoColorize;

use crate::checker::{TargetCheck, Verdict};
use crate::run::RunStats;

pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    // **** Checking: docs/README.md ****
    pub fn banner(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "**** Checking: {} ****", path.display().bold())
    }

    // Prints the status line for one target.
    // A failed target gets a diagnostic line with the reason right above it.
    pub fn target(&mut self, target: &str, check: &TargetCheck) -> io::Result<()> {
        if let Some(reason) = &check.reason {
            writeln!(self.out, "    {}", reason)?;
        }

        let label = format!("{}:", check.verdict.label());
        match check.verdict {
            Verdict::Failed => writeln!(self.out, "    {} {}", label.bright_red().bold(), target)?,
            Verdict::Success => writeln!(self.out, "    {} {}", label.green().bold(), target)?,
            Verdict::Skipped => writeln!(self.out, "    {} {}", label.yellow().bold(), target)?,
        }
        Ok(())
    }

    pub fn summary(&mut self, stats: &RunStats) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Check finished, checked {} files with {} links",
            stats.files, stats.links
        )?;

        if stats.has_errors() {
            let message = format!(
                "Errors detected: {} bad files with {} bad links",
                stats.bad_files, stats.bad_links
            );
            writeln!(self.out, "{}", message.bright_red().bold())?;
        } else {
            writeln!(self.out, "{}", "No errors detected".bold())?;
        }

        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{FailureReason, TransportKind};

    fn render(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_banner_names_the_document() {
        let output = render(|r| r.banner(Path::new("docs/a.md")));
        assert!(output.starts_with("**** Checking: "));
        assert!(output.contains("docs/a.md"));
        assert!(output.trim_end().ends_with("****"));
    }

    #[test]
    fn test_status_lines_use_distinct_colors() {
        let failed = render(|r| {
            r.target("./missing.txt", &TargetCheck::failed(FailureReason::Missing("x".into())))
        });
        let success = render(|r| r.target("./b.txt", &TargetCheck::success()));
        let skipped = render(|r| r.target("#top", &TargetCheck::skipped()));

        assert!(failed.contains("Failed:") && failed.ends_with(" ./missing.txt\n"));
        assert!(success.contains("Success:") && success.ends_with(" ./b.txt\n"));
        assert!(skipped.contains("Skipped:") && skipped.ends_with(" #top\n"));

        // Bright red, green and yellow foregrounds
        assert!(failed.contains("\x1b[91m"));
        assert!(success.contains("\x1b[32m"));
        assert!(skipped.contains("\x1b[33m"));
    }

    #[test]
    fn test_transport_error_prints_diagnostic_first() {
        let check = TargetCheck::failed(FailureReason::Transport {
            kind: TransportKind::Timeout,
            message: "operation timed out".to_string(),
        });
        let output = render(|r| r.target("https://example.invalid/x.png", &check));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "    Timeout: operation timed out");
        assert!(lines[1].contains("Failed:"));
    }

    #[test]
    fn test_http_status_is_printed_above_failure() {
        let check = TargetCheck::failed(FailureReason::Status(404));
        let output = render(|r| r.target("https://example.com/gone", &check));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "    HTTP 404");
        assert!(lines[1].contains("Failed:"));
    }

    #[test]
    fn test_missing_file_names_resolved_path() {
        let check = TargetCheck::failed(FailureReason::Missing("docs/b.md".into()));
        let output = render(|r| r.target("b.md", &check));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "    no such file: docs/b.md");
    }

    #[test]
    fn test_success_and_skip_have_no_diagnostic() {
        assert_eq!(render(|r| r.target("a.md", &TargetCheck::success())).lines().count(), 1);
        assert_eq!(render(|r| r.target("#top", &TargetCheck::skipped())).lines().count(), 1);
    }

    #[test]
    fn test_summary_without_errors() {
        let stats = RunStats {
            files: 2,
            links: 5,
            bad_files: 0,
            bad_links: 0,
        };
        let output = render(|r| r.summary(&stats));
        assert!(output.starts_with("\nCheck finished, checked 2 files with 5 links\n"));
        assert!(output.contains("No errors detected"));
        assert!(!output.contains("Errors detected"));
    }

    #[test]
    fn test_summary_with_errors() {
        let stats = RunStats {
            files: 2,
            links: 5,
            bad_files: 1,
            bad_links: 3,
        };
        let output = render(|r| r.summary(&stats));
        assert!(output.contains("Errors detected: 1 bad files with 3 bad links"));
        assert!(!output.contains("No errors detected"));
    }
}

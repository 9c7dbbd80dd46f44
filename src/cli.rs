// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is deliberately tiny: one or more markdown files, nothing
// else. clap still gives us --help and --version for free, and a proper
// usage error when no files are given.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "doc-link-check",
    version,
    about = "Check that every link and image in markdown documents resolves",
    long_about = "doc-link-check reads each markdown file given on the command line, \
                  extracts every link and image target, and verifies that local files exist \
                  and remote URLs answer a HEAD request with 2xx. \
                  \n\nExit status: 0 when every target resolves, 2 (ENOENT) when any target \
                  is broken, 1 when a document cannot be read. Note that a usage error \
                  (e.g. no FILES given) also exits with 2."
)]
pub struct Cli {
    /// Markdown documents to check, in order
    ///
    /// Relative link targets are resolved against each document's own folder
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr, filtered by RUST_LOG)
// 3. Check every document in order and print the report to stdout
// 4. Exit with proper code (0 = all good, 2 = broken links, 1 = fatal error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - extraction and link checking logic
mod cli; // src/cli.rs - command-line parsing
mod report; // src/report.rs - colored output
mod run; // src/run.rs - walks the documents and keeps the totals

use std::io;

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use tracing_subscriber::EnvFilter;

use checker::Checker;
use cli::Cli;
use report::Reporter;
use run::RunStats;

// A current-thread runtime is all we need: requests are sent one at a time
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let exit_code = match execute(cli).await {
        Ok(stats) => stats.exit_code(),
        Err(e) => {
            // Unreadable or non-UTF-8 document, or the HTTP client failed to start
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

async fn execute(cli: Cli) -> Result<RunStats> {
    let checker = Checker::new()?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());

    run::run(&cli.files, &checker, &mut reporter).await
}

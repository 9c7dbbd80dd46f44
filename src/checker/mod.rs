// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts link/image targets from markdown text
// - local: Checks targets that point at files on disk
// - http: Makes HTTP requests to check if remote links are alive
//
// This file (mod.rs) is the module root. It defines the shared types
// (Verdict, TargetCheck, ...) and the Checker, which decides whether a
// target is remote or local and sends it to the right submodule.
// =============================================================================

mod http;
mod local;
mod markdown;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use reqwest::Client;

pub use markdown::extract;

/// The outcome of checking one target. Exactly one per target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Nothing to check (a same-page anchor like `#top`)
    Skipped,
    /// The file exists or the URL answered 2xx
    Success,
    /// The file is missing, or the URL failed in any way
    Failed,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Skipped => "Skipped",
            Verdict::Success => "Success",
            Verdict::Failed => "Failed",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a target failed. Only used for diagnostics, never for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Nothing exists at the resolved local path
    Missing(PathBuf),
    /// The server answered, but not with 2xx
    Status(u16),
    /// The request never got a usable answer
    Transport { kind: TransportKind, message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Missing(path) => write!(f, "no such file: {}", path.display()),
            FailureReason::Status(code) => write!(f, "HTTP {}", code),
            FailureReason::Transport { kind, message } => write!(f, "{}: {}", kind.label(), message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Redirect,
    Tls,
    Other,
}

impl TransportKind {
    pub fn label(self) -> &'static str {
        match self {
            TransportKind::Timeout => "Timeout",
            TransportKind::Connect => "Connection error",
            TransportKind::Redirect => "Too many redirects",
            TransportKind::Tls => "TLS error",
            TransportKind::Other => "Request error",
        }
    }
}

// Represents the result of checking a single target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCheck {
    pub verdict: Verdict,
    /// Set only when verdict is Failed
    pub reason: Option<FailureReason>,
}

impl TargetCheck {
    pub fn success() -> Self {
        Self {
            verdict: Verdict::Success,
            reason: None,
        }
    }

    pub fn skipped() -> Self {
        Self {
            verdict: Verdict::Skipped,
            reason: None,
        }
    }

    pub fn failed(reason: FailureReason) -> Self {
        Self {
            verdict: Verdict::Failed,
            reason: Some(reason),
        }
    }

    /// The transport error, if this check failed before getting a response
    pub fn transport_error(&self) -> Option<(TransportKind, &str)> {
        match &self.reason {
            Some(FailureReason::Transport { kind, message }) => Some((*kind, message.as_str())),
            _ => None,
        }
    }
}

/// Where a target points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Remote,
    Local,
}

impl TargetKind {
    // Only these two exact prefixes make a target remote.
    // Everything else (mailto:, ftp:, relative paths...) is looked up on disk.
    pub fn classify(target: &str) -> Self {
        if target.starts_with("http://") || target.starts_with("https://") {
            TargetKind::Remote
        } else {
            TargetKind::Local
        }
    }
}

// Checks targets one at a time
//
// Owns the HTTP client so a whole run shares a single connection pool.
pub struct Checker {
    client: Client,
}

impl Checker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http::build_client()?,
        })
    }

    // Checks one target found in a document whose folder is `base_dir`
    //
    // Never returns an error: every problem becomes Verdict::Failed
    pub async fn check(&self, base_dir: &Path, target: &str) -> TargetCheck {
        match TargetKind::classify(target) {
            TargetKind::Remote => http::check_remote(&self.client, target).await,
            TargetKind::Local => local::check_local(base_dir, target),
        }
    }
}

// src/checker/http.rs
// =============================================================================
// This module checks if remote URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes a single HTTP HEAD request (lightweight, no body download)
// - Uses a short timeout so one slow host can't stall the whole run
// - Turns every failure (404, timeout, DNS, TLS...) into a Failed verdict
//   instead of an error, so the remaining links still get checked
//
// There are no retries: each URL gets exactly one chance.
//
// Rust concepts:
// - async/await: reqwest's client is async, we simply await each request
// - Result<T, E>: For error handling
// - Enums: To describe why a link failed
// =============================================================================

use std::error::Error as _;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

use super::{FailureReason, TargetCheck, TransportKind};

/// How long a single HEAD request may take, connect time included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Redirect hops followed before the request is treated as a loop
pub const MAX_REDIRECTS: usize = 5;

// Creates the HTTP client shared by every remote check in a run
//
// We build it once and reuse it for all requests (connection pooling)
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .context("Failed to create HTTP client")
}

// Checks a single remote URL
//
// The URL is sent as-is. A `#fragment` never reaches the server anyway,
// so unlike local targets there is nothing to strip here.
//
// Parameters:
//   client: reqwest HTTP client (borrowed, we don't own it)
//   url: the URL to check
//
// Returns: TargetCheck with Success or Failed (never Skipped)
pub async fn check_remote(client: &Client, url: &str) -> TargetCheck {
    match client.head(url).send().await {
        Ok(response) => analyze_status(url, response.status()),
        Err(e) => categorize_error(url, e),
    }
}

// Only 2xx counts as alive. Redirects were already followed by the client,
// so a 3xx here means the redirect had no usable Location.
fn analyze_status(url: &str, status_code: StatusCode) -> TargetCheck {
    tracing::debug!(url = %url, status = status_code.as_u16(), "HEAD response");

    if status_code.is_success() {
        TargetCheck::success()
    } else {
        TargetCheck::failed(FailureReason::Status(status_code.as_u16()))
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure / connection refused
// - SSL certificate issues
// - Too many redirects
// - etc.
fn categorize_error(url: &str, error: reqwest::Error) -> TargetCheck {
    let is_timeout = error.is_timeout();
    let is_redirect = error.is_redirect();
    let is_connect = error.is_connect();

    // The status line already shows the URL, and a URL like
    // `/docs/tls-setup.html` must not influence the category below
    let error = error.without_url();
    let error_string = error_message(&error);

    // TLS failures happen while connecting, so they are checked before is_connect
    let kind = if is_timeout {
        TransportKind::Timeout
    } else if is_redirect {
        TransportKind::Redirect
    } else if looks_like_tls(&error_string) {
        TransportKind::Tls
    } else if is_connect {
        TransportKind::Connect
    } else {
        TransportKind::Other
    };

    tracing::debug!(url = %url, kind = kind.label(), error = %error_string, "request failed");

    TargetCheck::failed(FailureReason::Transport {
        kind,
        message: error_string,
    })
}

// reqwest's message followed by the causes it doesn't already spell out.
// hyper prints its own cause, so most sources are already in the text.
fn error_message(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

fn looks_like_tls(message: &str) -> bool {
    let message = message.to_lowercase();
    ["certificate", "tls", "ssl", "handshake"]
        .iter()
        .any(|needle| message.contains(needle))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HEAD and not GET?
//    - HEAD asks for the headers only, so no page body is downloaded
//    - The status code is all we need to know whether the link is alive
//
// 2. Why return TargetCheck instead of Result?
//    - A dead link is an expected outcome, not a program error
//    - Returning a value keeps the caller's loop simple: no `?`, no early exit
//
// 3. What is a `const` Duration?
//    - Duration::from_secs is a `const fn`, so it can be computed at compile time
//    - Keeping tunables as consts puts them all in one obvious place
// -----------------------------------------------------------------------------

// ABOUTME: Structured logging setup for the FitTrack client
// ABOUTME: Thin tracing-subscriber initialization driven by RUST_LOG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Logging initialization.
//!
//! The crate itself only emits `tracing` events; hosts decide how they are
//! rendered. [`init`] installs a sensible default subscriber for binaries
//! and examples that do not bring their own.

use tracing_subscriber::EnvFilter;

/// Install the default `tracing` subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info` for this crate
/// and `warn` for everything else. Calling this twice is a no-op: the
/// second attempt to set the global subscriber fails and is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,fittrack_client=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

// ABOUTME: Shared test utilities for FitTrack client integration tests
// ABOUTME: Stub backend spawning, test configuration, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

//! Shared test utilities for `fittrack-client`
//!
//! Tests talk to small axum stub backends bound to an ephemeral local
//! port, so the client exercises real HTTP without a real deployment.

use axum::Router;
use fittrack_client::config::{ClientConfig, Platform};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Serve a stub backend on an ephemeral port, returning its base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub backend crashed");
    });

    format!("http://{addr}")
}

/// Client configuration pointing at a stub backend
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url, Platform::Desktop).expect("Failed to build test config")
}

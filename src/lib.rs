// ABOUTME: Main library entry point for the FitTrack client core
// ABOUTME: Provides the auth session lifecycle and nutrition API surface for UI layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

#![deny(unsafe_code)]

//! # FitTrack Client
//!
//! Typed async client for the FitTrack fitness backend. This crate is the
//! non-UI core shared by the web and mobile frontends: it owns the
//! authentication session lifecycle (token storage, sign-in/sign-up,
//! degraded-auth fallback) and the nutrition tracking API surface (foods,
//! meal entries, goals, daily and weekly summaries).
//!
//! ## Features
//!
//! - **Session lifecycle**: explicit session state machine with durable
//!   token storage and fail-closed startup validation
//! - **Backend tolerance**: auth header scheme and identity endpoint
//!   support are resolved once per session, so the client stays usable
//!   against backend deployments with differing auth stacks
//! - **Nutrition tracking**: typed access to foods, meal logging, goals,
//!   and server-computed daily/weekly summaries
//! - **Display-ready view models**: goal progress clamped for rings and
//!   bars, meal groups ordered for tabbed display
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fittrack_client::auth::{AuthClient, FileSessionStore, SessionManager};
//! use fittrack_client::config::ClientConfig;
//! use fittrack_client::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     fittrack_client::logging::init();
//!
//!     let config = ClientConfig::from_env()?;
//!     let auth = Arc::new(AuthClient::new(&config)?);
//!     let store = Arc::new(FileSessionStore::default_location()?);
//!
//!     let session = SessionManager::new(auth, store);
//!     session.initialize().await;
//!     println!("authenticated: {}", session.is_authenticated().await);
//!
//!     Ok(())
//! }
//! ```

/// Authentication: token codec, session store, auth client, session state machine
pub mod auth;

/// Configuration management and backend compatibility profiles
pub mod config;

/// Application constants: endpoint paths, defaults, error messages
pub mod constants;

/// Unified error handling with the client's failure taxonomy
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Common data models shared across the API surface
pub mod models;

/// Nutrition tracking: API client and display view models
pub mod nutrition;

// ABOUTME: Authentication module for the FitTrack client
// ABOUTME: Token codec, durable session store, backend auth client, and session state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! # Authentication and session management
//!
//! The session lifecycle is split into four pieces with narrow seams:
//!
//! - [`token`] - the token codec: shape heuristics and the composite-token
//!   backend compatibility shim, isolated so nothing else inspects tokens
//! - [`store`] - durable token persistence behind the [`SessionStore`]
//!   trait (file-backed in production, in-memory in tests)
//! - [`client`] - HTTP client for the auth endpoints, implementing the
//!   [`AuthApi`] trait seam
//! - [`session`] - the session state machine consumed by UI layers

/// Backend auth endpoints client
pub mod client;
/// Session state machine
pub mod session;
/// Durable token persistence
pub mod store;
/// Token shape heuristics and the composite-token shim
pub mod token;

pub use client::{AuthApi, AuthClient, ProfileResolution};
pub use session::{Session, SessionManager, SessionState};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

// ABOUTME: Token codec for the FitTrack client
// ABOUTME: Shape heuristics plus the composite user-id/token storage shim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Token codec.
//!
//! Backends issue two token shapes: structured three-segment tokens that
//! embed the user identity in their claims, and opaque single-segment keys
//! that do not. Two behaviors hang off that distinction:
//!
//! - opaque tokens are stored as `"<user_id>:<token>"` so the user id
//!   survives restarts (a compatibility shim for backends that omit it -
//!   see [`storage_form`])
//! - structured tokens are sent as `Bearer`, opaque ones as `Token`
//!
//! Both quirks live here and only here; session logic treats tokens as
//! fully opaque strings.

use crate::config::AuthScheme;

/// Whether a token embeds the user identity.
///
/// True for structured tokens with exactly three non-empty dot-separated
/// segments; the user id is recoverable from the claims segment, so the
/// composite storage form is unnecessary.
#[must_use]
pub fn embeds_user_id(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3 && segments.iter().all(|segment| !segment.is_empty())
}

/// The form a freshly issued token takes in the session store.
///
/// Opaque tokens are conjoined with the user id as `"<user_id>:<token>"`.
/// This is a workaround for backends whose tokens omit the user identity,
/// preserved behaviorally from the original clients; it is not a protocol.
/// The stored string is what later requests send verbatim.
#[must_use]
pub fn storage_form(user_id: &str, token: &str) -> String {
    if embeds_user_id(token) {
        token.to_owned()
    } else {
        format!("{user_id}:{token}")
    }
}

/// Header scheme to try first for a token of this shape.
///
/// Used only until a [`crate::config::BackendProfile`] is resolved; after
/// that the resolved scheme wins.
#[must_use]
pub fn preferred_scheme(token: &str) -> AuthScheme {
    if embeds_user_id(token) {
        AuthScheme::Bearer
    } else {
        AuthScheme::Token
    }
}

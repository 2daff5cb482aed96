// ABOUTME: Unit tests for the token codec
// ABOUTME: Validates shape heuristics, the composite storage shim, and scheme selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_client::auth::token::{embeds_user_id, preferred_scheme, storage_form};
use fittrack_client::config::AuthScheme;

#[test]
fn opaque_tokens_do_not_embed_identity() {
    assert!(!embeds_user_id("abc123"));
    assert!(!embeds_user_id("1:abc123"));
    assert!(!embeds_user_id(""));
}

#[test]
fn three_segment_tokens_embed_identity() {
    assert!(embeds_user_id("header.payload.signature"));
    assert!(embeds_user_id("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.sig"));
}

#[test]
fn degenerate_segment_counts_are_opaque() {
    // Wrong segment count or empty segments disqualify a token.
    assert!(!embeds_user_id("a.b"));
    assert!(!embeds_user_id("a.b.c.d"));
    assert!(!embeds_user_id("a..c"));
    assert!(!embeds_user_id(".."));
}

#[test]
fn opaque_tokens_store_with_user_id_prefix() {
    assert_eq!(storage_form("1", "abc123"), "1:abc123");
    assert_eq!(storage_form("42", "deadbeef"), "42:deadbeef");
}

#[test]
fn structured_tokens_store_unchanged() {
    let jwt = "header.payload.signature";
    assert_eq!(storage_form("1", jwt), jwt);
}

#[test]
fn composite_form_stays_opaque() {
    // Storing and re-storing must not stack prefixes' schemes: the
    // composite form still reads as an opaque token.
    let stored = storage_form("1", "abc123");
    assert_eq!(preferred_scheme(&stored), AuthScheme::Token);
}

#[test]
fn scheme_follows_token_shape() {
    assert_eq!(preferred_scheme("header.payload.signature"), AuthScheme::Bearer);
    assert_eq!(preferred_scheme("abc123"), AuthScheme::Token);
}

#[test]
fn header_values_render_both_schemes() {
    assert_eq!(AuthScheme::Bearer.header_value("t"), "Bearer t");
    assert_eq!(AuthScheme::Token.header_value("t"), "Token t");
}

#[test]
fn scheme_parsing_is_case_insensitive() {
    assert_eq!(AuthScheme::parse("bearer"), Some(AuthScheme::Bearer));
    assert_eq!(AuthScheme::parse("Bearer"), Some(AuthScheme::Bearer));
    assert_eq!(AuthScheme::parse("TOKEN"), Some(AuthScheme::Token));
    assert_eq!(AuthScheme::parse("basic"), None);
}

#[test]
fn alternate_scheme_flips() {
    assert_eq!(AuthScheme::Bearer.alternate(), AuthScheme::Token);
    assert_eq!(AuthScheme::Token.alternate(), AuthScheme::Bearer);
}

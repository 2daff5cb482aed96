// ABOUTME: Tests for the durable session token store
// ABOUTME: Validates file-backed persistence across instances and in-memory behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_client::auth::{FileSessionStore, MemorySessionStore, SessionStore};

#[tokio::test]
async fn file_store_round_trips_a_token() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileSessionStore::new(dir.path().join("session.token"));

    assert_eq!(store.load().await.unwrap(), None);

    store.save("1:abc123").await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some("1:abc123".to_owned()));

    store.clear().await.unwrap();
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn file_store_survives_reopening() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("session.token");

    FileSessionStore::new(&path).save("tok").await.unwrap();

    // A fresh instance over the same path sees the token.
    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.load().await.unwrap(), Some("tok".to_owned()));
}

#[tokio::test]
async fn file_store_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("deeper").join("session.token");

    let store = FileSessionStore::new(path);
    store.save("tok").await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some("tok".to_owned()));
}

#[tokio::test]
async fn file_store_clear_is_idempotent() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileSessionStore::new(dir.path().join("session.token"));

    store.clear().await.unwrap();
    store.clear().await.unwrap();
}

#[tokio::test]
async fn file_store_treats_blank_file_as_absent() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("session.token");
    tokio::fs::write(&path, "  \n").await.unwrap();

    let store = FileSessionStore::new(path);
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn memory_store_round_trips_a_token() {
    let store = MemorySessionStore::new();
    assert_eq!(store.load().await.unwrap(), None);

    store.save("tok").await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some("tok".to_owned()));

    store.clear().await.unwrap();
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn memory_store_can_be_preseeded() {
    let store = MemorySessionStore::with_token("seeded");
    assert_eq!(store.load().await.unwrap(), Some("seeded".to_owned()));
}

// ABOUTME: State machine tests for the session manager against a scripted auth API
// ABOUTME: Validates startup restoration, interactive flows, degraded auth, and sign-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use fittrack_client::auth::client::ProfileResolution;
use fittrack_client::auth::{
    AuthApi, MemorySessionStore, SessionManager, SessionState, SessionStore,
};
use fittrack_client::config::{AuthScheme, BackendProfile};
use fittrack_client::errors::{AppError, AppResult};
use fittrack_client::models::{AuthSession, UserProfile};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::init_test_logging;

fn test_user() -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        email: "test@example.com".to_owned(),
        display_name: Some("Test".to_owned()),
        avatar_url: None,
    }
}

/// How the scripted backend answers the startup capability probe
#[derive(Clone, Copy)]
enum ResolveBehavior {
    /// Identity endpoint works: full profile plus the test user
    Identity,
    /// Identity endpoint missing: degraded profile, no user
    Degraded,
    /// Token rejected outright
    Reject,
}

/// Scripted stand-in for the backend auth API with call counting
struct FakeAuth {
    accepted_password: String,
    issued_token: String,
    resolve_behavior: ResolveBehavior,
    fetch_ok: bool,
    fetch_calls: AtomicUsize,
    resolve_calls: AtomicUsize,
}

impl FakeAuth {
    fn new(resolve_behavior: ResolveBehavior) -> Self {
        Self {
            accepted_password: "password123".to_owned(),
            issued_token: "abc123".to_owned(),
            resolve_behavior,
            fetch_ok: true,
            fetch_calls: AtomicUsize::new(0),
            resolve_calls: AtomicUsize::new(0),
        }
    }

    fn rejecting_fetch(mut self) -> Self {
        self.fetch_ok = false;
        self
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        display_name: Option<&str>,
    ) -> AppResult<AuthSession> {
        Ok(AuthSession {
            user: UserProfile {
                id: "1".to_owned(),
                email: email.to_owned(),
                display_name: display_name.map(str::to_owned),
                avatar_url: None,
            },
            token: self.issued_token.clone(),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        if email == "test@example.com" && password == self.accepted_password {
            Ok(AuthSession {
                user: test_user(),
                token: self.issued_token.clone(),
            })
        } else {
            Err(AppError::auth_invalid("Invalid credentials"))
        }
    }

    async fn fetch_user(&self, _token: &str, _scheme: AuthScheme) -> AppResult<UserProfile> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fetch_ok {
            Ok(test_user())
        } else {
            Err(AppError::auth_invalid("Invalid token"))
        }
    }

    async fn resolve_profile(&self, _token: &str) -> AppResult<ProfileResolution> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        match self.resolve_behavior {
            ResolveBehavior::Identity => Ok(ProfileResolution {
                profile: BackendProfile::full(AuthScheme::Token),
                user: Some(test_user()),
            }),
            ResolveBehavior::Degraded => Ok(ProfileResolution {
                profile: BackendProfile::without_identity(AuthScheme::Token),
                user: None,
            }),
            ResolveBehavior::Reject => Err(AppError::auth_invalid("Invalid token")),
        }
    }
}

#[tokio::test]
async fn starts_anonymous_without_a_stored_token() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));
    let manager = SessionManager::new(auth.clone(), Arc::new(MemorySessionStore::new()));

    manager.initialize().await;

    let session = manager.current().await;
    assert_eq!(session.state, SessionState::Anonymous);
    assert!(!session.is_authenticated());
    // No token, no probe.
    assert_eq!(auth.resolve_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn restores_an_authenticated_session_from_a_stored_token() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));
    let store = Arc::new(MemorySessionStore::with_token("1:abc123"));
    let manager = SessionManager::new(auth, store);

    manager.initialize().await;

    let session = manager.current().await;
    assert_eq!(session.state, SessionState::Authenticated);
    assert_eq!(session.user.unwrap().email, "test@example.com");
    assert_eq!(session.token.unwrap(), "1:abc123");
}

#[tokio::test]
async fn rejected_stored_token_fails_closed_to_anonymous() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Reject));
    let store = Arc::new(MemorySessionStore::with_token("stale"));
    let manager = SessionManager::new(auth, store.clone());

    manager.initialize().await;

    let session = manager.current().await;
    assert_eq!(session.state, SessionState::Anonymous);
    // Fail closed without a user-visible error.
    assert!(session.error.is_none());
    // Stale token is gone for the next start.
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn missing_identity_endpoint_degrades_with_placeholder_user() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Degraded));
    let store = Arc::new(MemorySessionStore::with_token("1:abc123"));
    let manager = SessionManager::new(auth, store);

    manager.initialize().await;

    let session = manager.current().await;
    assert_eq!(session.state, SessionState::DegradedAuthenticated);
    assert!(session.is_authenticated());

    let user = session.user.unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.display_name.as_deref(), Some("User"));
}

#[tokio::test]
async fn degraded_validation_short_circuits_without_network() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Degraded));
    let store = Arc::new(MemorySessionStore::with_token("1:abc123"));
    let manager = SessionManager::new(auth.clone(), store);

    manager.initialize().await;
    assert!(manager.validate_token().await);
    assert!(manager.validate_token().await);

    // The identity endpoint was never re-queried.
    assert_eq!(auth.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sign_in_authenticates_and_persists_composite_token() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));
    let store = Arc::new(MemorySessionStore::new());
    let manager = SessionManager::new(auth, store.clone());
    manager.initialize().await;

    let user = manager
        .sign_in("test@example.com", "password123")
        .await
        .unwrap();

    assert_eq!(user.email, "test@example.com");
    assert!(manager.is_authenticated().await);
    // "abc123" is opaque, so storage holds the composite form.
    assert_eq!(store.load().await.unwrap(), Some("1:abc123".to_owned()));
    assert_eq!(manager.auth_scheme().await, AuthScheme::Token);
}

#[tokio::test]
async fn failed_sign_in_leaves_state_unchanged_with_error() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));
    let manager = SessionManager::new(auth, Arc::new(MemorySessionStore::new()));
    manager.initialize().await;

    let err = manager.sign_in("test@example.com", "wrong").await;
    assert!(err.is_err());

    let session = manager.current().await;
    assert_eq!(session.state, SessionState::Anonymous);
    assert!(!session.is_authenticated());
    assert_eq!(session.error.as_deref(), Some(
        "Authentication failed: Invalid credentials"
    ));
}

#[tokio::test]
async fn sign_up_authenticates_with_submitted_email() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));
    let manager = SessionManager::new(auth, Arc::new(MemorySessionStore::new()));
    manager.initialize().await;

    let user = manager
        .sign_up("new@example.com", "password123", Some("New User"))
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert!(manager.is_authenticated().await);
}

#[tokio::test]
async fn sign_out_clears_token_and_next_start_is_anonymous() {
    init_test_logging();
    let store = Arc::new(MemorySessionStore::new());
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));

    let manager = SessionManager::new(auth.clone(), store.clone());
    manager.initialize().await;
    manager
        .sign_in("test@example.com", "password123")
        .await
        .unwrap();
    assert!(manager.is_authenticated().await);

    manager.sign_out().await;
    assert!(!manager.is_authenticated().await);
    assert_eq!(store.load().await.unwrap(), None);

    // A fresh manager over the same store restarts anonymous.
    let restarted = SessionManager::new(auth, store);
    restarted.initialize().await;
    assert_eq!(restarted.current().await.state, SessionState::Anonymous);
}

#[tokio::test]
async fn failed_validation_drops_to_anonymous() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity).rejecting_fetch());
    let store = Arc::new(MemorySessionStore::with_token("1:abc123"));
    let manager = SessionManager::new(auth, store.clone());

    manager.initialize().await;
    assert!(manager.is_authenticated().await);

    assert!(!manager.validate_token().await);
    assert_eq!(manager.current().await.state, SessionState::Anonymous);
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn validation_is_false_while_anonymous() {
    init_test_logging();
    let auth = Arc::new(FakeAuth::new(ResolveBehavior::Identity));
    let manager = SessionManager::new(auth.clone(), Arc::new(MemorySessionStore::new()));
    manager.initialize().await;

    assert!(!manager.validate_token().await);
    assert_eq!(auth.fetch_calls.load(Ordering::SeqCst), 0);
}

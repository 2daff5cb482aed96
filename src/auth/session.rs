// ABOUTME: Session state machine for the FitTrack client
// ABOUTME: Explicit session object owning sign-in/out, startup validation, and degraded auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Session state machine.
//!
//! States: `Unknown` (startup) transitions to `Anonymous`, `Authenticated`,
//! or `DegradedAuthenticated`. The manager is an explicitly constructed
//! object injected into the UI composition root - there is no ambient
//! global session.
//!
//! Failure semantics: transient failures during the initial load fail
//! closed to `Anonymous` without surfacing an error; failures during
//! interactive sign-in/sign-up set a user-visible error string and leave
//! the authentication state untouched.

use crate::config::{AuthScheme, BackendProfile};
use crate::constants::fallback_user;
use crate::errors::AppResult;
use crate::models::UserProfile;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::client::AuthApi;
use super::store::SessionStore;
use super::token;

/// Discriminant for the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Startup: the stored token has not been checked yet
    Unknown,
    /// No token, or the stored token was rejected
    Anonymous,
    /// Token held and identity confirmed by the backend
    Authenticated,
    /// Token held but identity unconfirmable: the backend lacks an
    /// identity endpoint, so a placeholder identity is substituted
    DegradedAuthenticated,
}

/// Immutable snapshot of the session handed to UI layers
#[derive(Debug, Clone)]
pub struct Session {
    /// Lifecycle state
    pub state: SessionState,
    /// Current user; present exactly when authenticated (possibly degraded)
    pub user: Option<UserProfile>,
    /// Stored token in its storage form
    pub token: Option<String>,
    /// Most recent interactive error, for inline display
    pub error: Option<String>,
}

impl Session {
    const fn anonymous() -> Self {
        Self {
            state: SessionState::Anonymous,
            user: None,
            token: None,
            error: None,
        }
    }

    /// Whether a user is present (authenticated or degraded-authenticated)
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the startup check is still pending
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Unknown
    }
}

struct Inner {
    session: Session,
    profile: Option<BackendProfile>,
    skip_validation: bool,
}

/// Explicit session object owning the authentication lifecycle.
///
/// Constructed once at the composition root and shared behind [`Arc`];
/// every accessor returns a snapshot rather than exposing mutable state.
pub struct SessionManager {
    auth: Arc<dyn AuthApi>,
    store: Arc<dyn SessionStore>,
    scheme_override: Option<AuthScheme>,
    inner: RwLock<Inner>,
}

impl SessionManager {
    /// Create a manager over an auth API and a token store
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            auth,
            store,
            scheme_override: None,
            inner: RwLock::new(Inner {
                session: Session {
                    state: SessionState::Unknown,
                    user: None,
                    token: None,
                    error: None,
                },
                profile: None,
                skip_validation: false,
            }),
        }
    }

    /// Pin the authorization scheme instead of deriving it per session
    #[must_use]
    pub fn with_scheme_override(mut self, scheme: AuthScheme) -> Self {
        self.scheme_override = Some(scheme);
        self
    }

    /// Restore the session from the store at app start.
    ///
    /// Absent token: `Anonymous`. Present token: one capability-detection
    /// call resolves the backend profile and confirms identity. Any failure
    /// other than an unsupported identity endpoint clears the token and
    /// fails closed to `Anonymous` with no surfaced error.
    pub async fn initialize(&self) {
        let mut inner = self.inner.write().await;

        let stored = match self.store.load().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("no stored token; starting anonymous");
                inner.session = Session::anonymous();
                return;
            }
            Err(e) => {
                warn!(error = %e, "session store unreadable; starting anonymous");
                inner.session = Session::anonymous();
                return;
            }
        };

        match self.auth.resolve_profile(&stored).await {
            Ok(resolution) => {
                inner.profile = Some(resolution.profile);
                if let Some(user) = resolution.user {
                    info!(user_id = %user.id, "session restored");
                    inner.session = Session {
                        state: SessionState::Authenticated,
                        user: Some(user),
                        token: Some(stored),
                        error: None,
                    };
                } else {
                    info!("session restored in degraded mode");
                    inner.skip_validation = true;
                    inner.session = Session {
                        state: SessionState::DegradedAuthenticated,
                        user: Some(placeholder_user()),
                        token: Some(stored),
                        error: None,
                    };
                }
            }
            Err(e) => {
                debug!(error = %e, "stored token rejected; starting anonymous");
                if let Err(clear_err) = self.store.clear().await {
                    warn!(error = %clear_err, "failed to clear rejected token");
                }
                inner.session = Session::anonymous();
            }
        }
    }

    /// Interactive sign-in. On success the session becomes `Authenticated`
    /// and the token is persisted; on failure the state is unchanged and
    /// the error string is recorded for inline display.
    ///
    /// # Errors
    /// Propagates the classified failure from the auth API.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        let result = self.auth.sign_in(email, password).await;
        self.apply_interactive(result).await
    }

    /// Interactive sign-up; same state semantics as [`Self::sign_in`].
    ///
    /// # Errors
    /// Propagates the classified failure from the auth API.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AppResult<UserProfile> {
        let result = self.auth.sign_up(email, password, display_name).await;
        self.apply_interactive(result).await
    }

    /// Sign out: clear the stored token and return to `Anonymous`.
    pub async fn sign_out(&self) {
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "failed to clear stored token on sign-out");
        }
        let mut inner = self.inner.write().await;
        inner.session = Session::anonymous();
        inner.profile = None;
        inner.skip_validation = false;
        info!("signed out");
    }

    /// Re-check the held token on demand.
    ///
    /// In `DegradedAuthenticated` this short-circuits to `true` without a
    /// network call - the backend cannot confirm identity, so re-asking is
    /// pointless. In `Authenticated` the identity endpoint is re-queried
    /// and any failure drops the session to `Anonymous`. Anywhere else the
    /// answer is `false`.
    pub async fn validate_token(&self) -> bool {
        let mut inner = self.inner.write().await;

        if inner.skip_validation {
            debug!("validation short-circuited in degraded mode");
            return true;
        }

        match inner.session.state {
            SessionState::DegradedAuthenticated => true,
            SessionState::Authenticated => {
                let Some(stored) = inner.session.token.clone() else {
                    return false;
                };
                let scheme = inner
                    .profile
                    .map_or_else(|| token::preferred_scheme(&stored), |p| p.auth_scheme);

                match self.auth.fetch_user(&stored, scheme).await {
                    Ok(_) => true,
                    Err(e) => {
                        debug!(error = %e, "token validation failed; signing out");
                        if let Err(clear_err) = self.store.clear().await {
                            warn!(error = %clear_err, "failed to clear invalid token");
                        }
                        inner.session = Session::anonymous();
                        inner.profile = None;
                        inner.skip_validation = false;
                        false
                    }
                }
            }
            SessionState::Unknown | SessionState::Anonymous => false,
        }
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Session {
        self.inner.read().await.session.clone()
    }

    /// Whether a user is present
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.session.is_authenticated()
    }

    /// Stored token, when one is held
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.session.token.clone()
    }

    /// Authorization scheme for sibling clients: the resolved profile's
    /// scheme, else the `Token` default the nutrition endpoints expect
    pub async fn auth_scheme(&self) -> AuthScheme {
        self.inner
            .read()
            .await
            .profile
            .map_or(AuthScheme::Token, |p| p.auth_scheme)
    }

    /// Shared handling for sign-in/sign-up outcomes
    async fn apply_interactive(
        &self,
        result: AppResult<crate::models::AuthSession>,
    ) -> AppResult<UserProfile> {
        match result {
            Ok(auth_session) => {
                let stored = token::storage_form(&auth_session.user.id, &auth_session.token);
                if let Err(e) = self.store.save(&stored).await {
                    // The in-memory session still works; only restarts lose it.
                    warn!(error = %e, "failed to persist session token");
                }

                let scheme = self
                    .scheme_override
                    .unwrap_or_else(|| token::preferred_scheme(&stored));

                let mut inner = self.inner.write().await;
                inner.profile = Some(BackendProfile::full(scheme));
                inner.skip_validation = false;
                inner.session = Session {
                    state: SessionState::Authenticated,
                    user: Some(auth_session.user.clone()),
                    token: Some(stored),
                    error: None,
                };
                Ok(auth_session.user)
            }
            Err(e) => {
                let mut inner = self.inner.write().await;
                inner.session.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

/// Placeholder identity for degraded-authenticated sessions
fn placeholder_user() -> UserProfile {
    UserProfile {
        id: fallback_user::ID.to_owned(),
        email: fallback_user::EMAIL.to_owned(),
        display_name: Some(fallback_user::DISPLAY_NAME.to_owned()),
        avatar_url: None,
    }
}

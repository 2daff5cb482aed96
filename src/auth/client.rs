// ABOUTME: HTTP client for the FitTrack backend auth endpoints
// ABOUTME: Sign-up, sign-in, identity fetch with dual-scheme fallback, failure classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Auth endpoints client.
//!
//! Wraps `POST /api/auth/signup/`, `POST /api/auth/login/`,
//! `GET /api/auth/me/`, and `POST /api/auth/password-reset/`. Failures are
//! classified into the crate taxonomy: a structured 4xx body becomes
//! [`AppError::Validation`] with the server's message verbatim, a transport
//! failure with no response becomes [`AppError::Network`], and an identity
//! endpoint that rejects both authorization schemes with 403/404 becomes
//! [`AppError::IdentityUnsupported`] so the session can degrade instead of
//! failing.

use crate::config::{AuthScheme, BackendProfile, ClientConfig};
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthSession, UserProfile};
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};

use super::token;

/// Outcome of the once-per-session backend capability probe
#[derive(Debug, Clone)]
pub struct ProfileResolution {
    /// Resolved compatibility profile for all subsequent requests
    pub profile: BackendProfile,
    /// Server-confirmed identity; `None` when the identity endpoint is
    /// unsupported and the session should degrade
    pub user: Option<UserProfile>,
}

/// Backend auth API as consumed by the session state machine.
///
/// [`AuthClient`] is the production implementation; tests substitute
/// scripted fakes to drive state transitions without a network.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Register a new account
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AppResult<AuthSession>;

    /// Exchange credentials for a token
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// Fetch the current user with a single, already-resolved scheme
    async fn fetch_user(&self, token: &str, scheme: AuthScheme) -> AppResult<UserProfile>;

    /// Probe the identity endpoint once, resolving the backend profile
    async fn resolve_profile(&self, token: &str) -> AppResult<ProfileResolution>;
}

/// HTTP client for the backend auth endpoints
pub struct AuthClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// Single identity-endpoint attempt outcome, kept internal so the
/// forbidden-vs-other distinction never leaks past the resolution logic
enum MeFailure {
    /// 403/404 - possibly the wrong scheme, possibly an absent endpoint
    Forbidden(u16),
    /// Anything else, already classified
    Other(AppError),
}

impl MeFailure {
    fn into_app_error(self) -> AppError {
        match self {
            Self::Forbidden(status) => {
                AppError::auth_invalid(format!("identity request rejected with HTTP {status}"))
            }
            Self::Other(error) => error,
        }
    }
}

impl AuthClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("building HTTP client: {e}")))?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Request a password reset email; the backend always acknowledges
    /// with a generic message regardless of whether the account exists.
    ///
    /// # Errors
    /// Returns [`AppError::Network`] when no response was received, or a
    /// classified error for non-2xx responses.
    pub async fn request_password_reset(&self, email: &str) -> AppResult<String> {
        let response = self
            .http
            .post(self.config.endpoint(endpoints::AUTH_PASSWORD_RESET))
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        if !response.status().is_success() {
            return Err(failure_from_response(response).await);
        }

        let body: JsonValue = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("parsing password reset response: {e}")))?;
        Ok(body
            .get("message")
            .and_then(JsonValue::as_str)
            .unwrap_or("Password reset requested")
            .to_owned())
    }

    /// Fetch the current user, probing both authorization schemes.
    ///
    /// Tries the scheme suggested by the token shape first and retries once
    /// with the other on failure.
    ///
    /// # Errors
    /// Returns [`AppError::IdentityUnsupported`] when both attempts are
    /// rejected with 403/404, otherwise the classified error of the final
    /// attempt.
    pub async fn get_current_user(&self, token: &str) -> AppResult<UserProfile> {
        let resolution = self.resolve_profile(token).await?;
        resolution.user.ok_or(AppError::IdentityUnsupported)
    }

    /// Scheme to try first: the configured pin, else the token-shape heuristic
    fn initial_scheme(&self, token: &str) -> AuthScheme {
        self.config
            .auth_scheme_override
            .unwrap_or_else(|| token::preferred_scheme(token))
    }

    /// One identity-endpoint attempt with one scheme
    async fn try_me(&self, token: &str, scheme: AuthScheme) -> Result<UserProfile, MeFailure> {
        let response = self
            .http
            .get(self.config.endpoint(endpoints::AUTH_ME))
            .header(header::AUTHORIZATION, scheme.header_value(token))
            .send()
            .await
            .map_err(|e| MeFailure::Other(AppError::network(self.config.platform, e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<UserProfile>()
                .await
                .map_err(|e| {
                    MeFailure::Other(AppError::internal(format!("parsing identity response: {e}")))
                });
        }

        if status == StatusCode::FORBIDDEN || status == StatusCode::NOT_FOUND {
            debug!(%scheme, %status, "identity attempt rejected");
            return Err(MeFailure::Forbidden(status.as_u16()));
        }

        Err(MeFailure::Other(failure_from_response(response).await))
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    #[tracing::instrument(skip(self, password, display_name))]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AppResult<AuthSession> {
        info!("user registration attempt");

        let mut body = serde_json::Map::new();
        body.insert("email".to_owned(), json!(email));
        body.insert("password".to_owned(), json!(password));
        if let Some(name) = display_name {
            body.insert("display_name".to_owned(), json!(name));
        }

        let response = self
            .http
            .post(self.config.endpoint(endpoints::AUTH_SIGNUP))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        if !response.status().is_success() {
            return Err(failure_from_response(response).await);
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| AppError::internal(format!("parsing registration response: {e}")))
    }

    #[tracing::instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        info!("sign-in attempt");

        let response = self
            .http
            .post(self.config.endpoint(endpoints::AUTH_LOGIN))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        if !response.status().is_success() {
            return Err(failure_from_response(response).await);
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| AppError::internal(format!("parsing sign-in response: {e}")))
    }

    async fn fetch_user(&self, token: &str, scheme: AuthScheme) -> AppResult<UserProfile> {
        self.try_me(token, scheme)
            .await
            .map_err(MeFailure::into_app_error)
    }

    async fn resolve_profile(&self, token: &str) -> AppResult<ProfileResolution> {
        let preferred = self.initial_scheme(token);

        let first_failure = match self.try_me(token, preferred).await {
            Ok(user) => {
                return Ok(ProfileResolution {
                    profile: BackendProfile::full(preferred),
                    user: Some(user),
                })
            }
            Err(failure) => failure,
        };

        let alternate = preferred.alternate();
        debug!(%alternate, "retrying identity endpoint with alternate scheme");

        match self.try_me(token, alternate).await {
            Ok(user) => Ok(ProfileResolution {
                profile: BackendProfile::full(alternate),
                user: Some(user),
            }),
            Err(second_failure) => {
                if let (MeFailure::Forbidden(_), MeFailure::Forbidden(_)) =
                    (&first_failure, &second_failure)
                {
                    // Endpoint absent on this deployment, not a bad token.
                    info!("identity endpoint unsupported; session will degrade");
                    Ok(ProfileResolution {
                        profile: BackendProfile::without_identity(preferred),
                        user: None,
                    })
                } else {
                    Err(second_failure.into_app_error())
                }
            }
        }
    }
}

/// Classify a non-2xx response into the crate error taxonomy
pub(crate) async fn failure_from_response(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned()
    });

    match status.as_u16() {
        401 | 403 => AppError::auth_invalid(message),
        404 => AppError::not_found(message),
        s if (400..500).contains(&s) => AppError::validation(message),
        s => AppError::Http { status: s, message },
    }
}

/// Pull a human-readable message out of a structured error body.
///
/// Handles the `{"error": "..."}` and `{"detail": "..."}` shapes plus
/// serializer error maps (`{"email": ["This field is required."]}`).
fn extract_message(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["error", "detail", "message"] {
        if let Some(message) = object.get(key).and_then(JsonValue::as_str) {
            return Some(message.to_owned());
        }
    }

    let mut parts = Vec::new();
    for (field, errors) in object {
        match errors {
            JsonValue::Array(list) => {
                for entry in list.iter().filter_map(JsonValue::as_str) {
                    if field == "non_field_errors" {
                        parts.push(entry.to_owned());
                    } else {
                        parts.push(format!("{field}: {entry}"));
                    }
                }
            }
            JsonValue::String(text) => parts.push(format!("{field}: {text}")),
            _ => {}
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

// ABOUTME: Unified error handling system for the FitTrack client
// ABOUTME: Classifies backend failures into the taxonomy the session and UI layers act on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Unified error type for the client core.
//!
//! Failures fall into a small taxonomy the rest of the crate dispatches on:
//!
//! - [`AppError::Validation`] - the backend rejected a request with a
//!   structured 4xx body; the message is surfaced to the user verbatim
//! - [`AppError::Network`] - no response was received at all; rendered with
//!   a platform connectivity hint
//! - [`AppError::AuthInvalid`] - credentials or token rejected during an
//!   interactive flow; surfaced inline without mutating session state
//! - [`AppError::IdentityUnsupported`] - the identity endpoint rejected
//!   both authorization schemes; triggers the degraded-auth fallback and is
//!   never shown to users
//! - [`AppError::FeatureUnavailable`] - an optional endpoint answered
//!   403/404; callers substitute an empty result instead of an error banner

use crate::config::Platform;

/// Result type alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Unified error type for all client operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Backend rejected the request with a structured 4xx body
    #[error("{0}")]
    Validation(String),

    /// No response was received from the backend
    #[error("{}", network_message(.platform))]
    Network {
        /// Platform the client is running on, used to pick the hint text
        platform: Platform,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Credentials or token rejected (401/403 on an interactive flow)
    #[error("Authentication failed: {0}")]
    AuthInvalid(String),

    /// Identity endpoint rejected both authorization schemes (403/404)
    #[error("identity endpoint not supported by this backend deployment")]
    IdentityUnsupported,

    /// Optional endpoint answered 403/404; treated as "feature unavailable"
    #[error("feature unavailable on this backend deployment")]
    FeatureUnavailable,

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected locally before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session store read or write failed
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected HTTP status outside the classified taxonomy
    #[error("Backend returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a validation error carrying the server's message verbatim
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a network error for the given platform
    #[must_use]
    pub fn network(platform: Platform, source: reqwest::Error) -> Self {
        Self::Network { platform, source }
    }

    /// Create an authentication failure error
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::AuthInvalid(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a local input validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a session storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error means "no response was received at all"
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Whether this error should trigger the degraded-auth fallback
    #[must_use]
    pub const fn is_identity_unsupported(&self) -> bool {
        matches!(self, Self::IdentityUnsupported)
    }

    /// Whether callers should substitute an empty result for this error
    #[must_use]
    pub const fn is_feature_unavailable(&self) -> bool {
        matches!(self, Self::FeatureUnavailable)
    }

    /// The message shown to the user for interactive flows.
    ///
    /// Internal signals ([`AppError::IdentityUnsupported`],
    /// [`AppError::FeatureUnavailable`]) are mapped to a generic message so
    /// they never leak wording that only makes sense inside the client.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::IdentityUnsupported | Self::FeatureUnavailable | Self::Internal(_) => {
                "Something went wrong. Please try again.".to_owned()
            }
            other => other.to_string(),
        }
    }
}

/// Connectivity message with the per-platform hint appended
fn network_message(platform: &Platform) -> String {
    format!(
        "Could not reach the server. Check your connection{}",
        platform_hint(*platform)
    )
}

const fn platform_hint(platform: Platform) -> &'static str {
    match platform {
        Platform::Android => {
            " (Android emulators must use 10.0.2.2 instead of localhost to reach a local backend)"
        }
        Platform::Desktop | Platform::Ios => " and that the backend is running",
    }
}

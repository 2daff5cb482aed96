// ABOUTME: Backend compatibility profiles for the FitTrack client
// ABOUTME: Authorization header scheme and identity endpoint support, resolved once per session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Backend compatibility profiles.
//!
//! Deployed backends disagree on two points: which authorization header
//! scheme they accept (`Bearer <token>` vs `Token <token>`) and whether the
//! `/api/auth/me/` identity endpoint exists at all. Instead of re-probing
//! on every request, the client resolves a [`BackendProfile`] once when a
//! session starts and every subsequent request reads from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization header scheme accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>` - structured (JWT-style) tokens
    Bearer,
    /// `Authorization: Token <token>` - opaque DRF-style tokens
    Token,
}

impl AuthScheme {
    /// Parse a scheme name as written in `FITTRACK_AUTH_SCHEME`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "bearer" => Some(Self::Bearer),
            "token" => Some(Self::Token),
            _ => None,
        }
    }

    /// The other scheme, used for the single retry during resolution
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Bearer => Self::Token,
            Self::Token => Self::Bearer,
        }
    }

    /// Render the `Authorization` header value for a token
    #[must_use]
    pub fn header_value(self, token: &str) -> String {
        match self {
            Self::Bearer => format!("Bearer {token}"),
            Self::Token => format!("Token {token}"),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer => f.write_str("Bearer"),
            Self::Token => f.write_str("Token"),
        }
    }
}

/// Backend capabilities resolved once at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendProfile {
    /// Scheme the backend accepted during resolution
    pub auth_scheme: AuthScheme,
    /// Whether `/api/auth/me/` is implemented on this deployment
    pub identity_supported: bool,
}

impl BackendProfile {
    /// Profile for a backend with a working identity endpoint
    #[must_use]
    pub const fn full(auth_scheme: AuthScheme) -> Self {
        Self {
            auth_scheme,
            identity_supported: true,
        }
    }

    /// Profile for a backend without an identity endpoint.
    ///
    /// Sessions against such a backend run degraded-authenticated: the
    /// token is trusted locally and identity is a placeholder.
    #[must_use]
    pub const fn without_identity(auth_scheme: AuthScheme) -> Self {
        Self {
            auth_scheme,
            identity_supported: false,
        }
    }
}

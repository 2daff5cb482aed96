// ABOUTME: Configuration management for the FitTrack client
// ABOUTME: Environment-driven base URL and platform selection plus backend profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Client configuration.
//!
//! Configuration is environment-only, resolved once at startup:
//!
//! - `FITTRACK_API_BASE_URL` - backend base URL override
//! - `FITTRACK_PLATFORM` - `desktop`, `ios`, or `android`; picks the
//!   loopback default when no base URL is set (Android emulators reach the
//!   host through `10.0.2.2`, not `127.0.0.1`)
//! - `FITTRACK_AUTH_SCHEME` - optional `bearer`/`token` pin, skipping the
//!   per-session scheme resolution

pub mod profile;

pub use profile::{AuthScheme, BackendProfile};

use crate::errors::{AppError, AppResult};
use std::env;
use tracing::info;
use url::Url;

/// Environment variable naming the backend base URL
pub const ENV_BASE_URL: &str = "FITTRACK_API_BASE_URL";
/// Environment variable naming the client platform
pub const ENV_PLATFORM: &str = "FITTRACK_PLATFORM";
/// Environment variable pinning the authorization header scheme
pub const ENV_AUTH_SCHEME: &str = "FITTRACK_AUTH_SCHEME";

/// Platform the client is running on.
///
/// Only affects the default loopback address and the connectivity hint in
/// network error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Desktop browser or native desktop shell
    Desktop,
    /// iOS device or simulator
    Ios,
    /// Android device or emulator
    Android,
}

impl Platform {
    /// Parse a platform name as written in `FITTRACK_PLATFORM`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "desktop" | "web" => Some(Self::Desktop),
            "ios" => Some(Self::Ios),
            "android" => Some(Self::Android),
            _ => None,
        }
    }

    /// Loopback base URL used when no explicit base URL is configured.
    ///
    /// Android emulators cannot reach the host machine through `127.0.0.1`;
    /// Google's emulator maps the host loopback to `10.0.2.2`.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Desktop | Self::Ios => "http://127.0.0.1:8000",
            Self::Android => "http://10.0.2.2:8000",
        }
    }
}

/// Resolved client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub base_url: String,
    /// Platform the client is running on
    pub platform: Platform,
    /// Pinned authorization scheme, when `FITTRACK_AUTH_SCHEME` is set
    pub auth_scheme_override: Option<AuthScheme>,
}

impl ClientConfig {
    /// Build a configuration from an explicit base URL and platform.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the base URL does not parse.
    pub fn new(base_url: &str, platform: Platform) -> AppResult<Self> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed)
            .map_err(|e| AppError::config(format!("invalid base URL {trimmed:?}: {e}")))?;

        Ok(Self {
            base_url: trimmed.to_owned(),
            platform,
            auth_scheme_override: None,
        })
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if a set variable holds an
    /// unrecognized value or the resulting base URL does not parse.
    pub fn from_env() -> AppResult<Self> {
        let platform = match env::var(ENV_PLATFORM) {
            Ok(raw) => Platform::parse(&raw)
                .ok_or_else(|| AppError::config(format!("unknown {ENV_PLATFORM} value {raw:?}")))?,
            Err(_) => Platform::Desktop,
        };

        let base_url =
            env::var(ENV_BASE_URL).unwrap_or_else(|_| platform.default_base_url().to_owned());

        let mut config = Self::new(&base_url, platform)?;

        if let Ok(raw) = env::var(ENV_AUTH_SCHEME) {
            let scheme = AuthScheme::parse(&raw)
                .ok_or_else(|| AppError::config(format!("unknown {ENV_AUTH_SCHEME} value {raw:?}")))?;
            config.auth_scheme_override = Some(scheme);
        }

        info!(
            base_url = %config.base_url,
            platform = ?config.platform,
            "client configuration loaded"
        );

        Ok(config)
    }

    /// Absolute URL for an endpoint path from [`crate::constants::endpoints`]
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

// ABOUTME: Durable session token storage for the FitTrack client
// ABOUTME: SessionStore trait with file-backed and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Session token persistence.
//!
//! The store holds exactly one opaque token string per app installation,
//! durable until explicitly cleared or the storage is wiped externally. No
//! encryption and no expiry tracking: a 401/403 on use is the expiry
//! signal, delegated to the backend.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

/// Durable storage for the session token
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the token, replacing any previous one
    async fn save(&self, token: &str) -> AppResult<()>;

    /// Load the stored token, if any
    async fn load(&self) -> AppResult<Option<String>>;

    /// Remove the stored token; succeeds when nothing is stored
    async fn clear(&self) -> AppResult<()>;
}

/// File-backed session store under the platform data directory
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location
    /// (`<data dir>/fittrack/session.token`).
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] if the platform exposes no data
    /// directory.
    pub fn default_location() -> AppResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| AppError::storage("no platform data directory available"))?;
        Ok(Self::new(base.join("fittrack").join("session.token")))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::storage(format!("creating {}: {e}", parent.display())))?;
        }
        tokio::fs::write(&self.path, token)
            .await
            .map_err(|e| AppError::storage(format!("writing {}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    async fn load(&self) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_owned()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "reading {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "removing {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// In-memory session store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    /// Empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// In-memory store pre-seeded with a token
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_owned())),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, token: &str) -> AppResult<()> {
        *self.token.write().await = Some(token.to_owned());
        Ok(())
    }

    async fn load(&self) -> AppResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

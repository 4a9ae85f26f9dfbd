//! Persisted auth session.
//!
//! The dashboard talks to the API with a bearer token handed out at login.
//! The token lives in a small JSON file (the client-storage analogue), is
//! written on login and removed on logout, and is injected into the HTTP
//! gateway as a capability rather than read ad hoc. A missing token is not
//! an error here: requests go out unauthenticated and the server rejects
//! them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub email: Option<String>,
}

/// File-backed store for the current [`AuthSession`].
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted session. A missing file means signed out.
    pub fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persists the session handed out by the auth endpoint.
    pub fn login(&self, session: &AuthSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Removes the persisted session, if any.
    pub fn logout(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Token for the `Authorization: Bearer` header. Read failures are
    /// logged and treated as signed out.
    pub fn bearer_token(&self) -> Option<String> {
        match self.load() {
            Ok(session) => session.map(|s| s.token),
            Err(err) => {
                log::error!("Failed to read session store: {err}");
                None
            }
        }
    }
}

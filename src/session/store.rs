//! File-backed session persistence: one JSON file holding the token and the
//! cached user, valid only as a pair.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::models::User;
use crate::common::http::TokenSource;
use crate::common::safe_token_log;

pub const SESSION_FILE_ENV: &str = "STORYLOOM_SESSION_FILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

impl PersistedSession {
    /// A session is well-formed only when both halves carry data.
    fn is_well_formed(&self) -> bool {
        !self.token.trim().is_empty() && !self.user.id.trim().is_empty()
    }
}

pub struct SessionStore {
    path: PathBuf,
    state: RwLock<Option<PersistedSession>>,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: RwLock::new(None),
        }
    }

    /// Default location: `$STORYLOOM_SESSION_FILE`, else the user config dir.
    pub fn from_env() -> Self {
        let path = std::env::var(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("storyloom")
                    .join("session.json")
            });
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session into memory. A missing file means logged
    /// out; a malformed or partial file is cleared from disk (idempotent) and
    /// also means logged out.
    pub fn load(&self) -> Option<PersistedSession> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.set_memory(None);
                return None;
            }
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "failed to read session file");
                self.set_memory(None);
                return None;
            }
        };

        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(session) if session.is_well_formed() => {
                debug!(
                    user_id = %session.user.id,
                    token = %safe_token_log(&session.token),
                    "session restored from disk"
                );
                self.set_memory(Some(session.clone()));
                Some(session)
            }
            Ok(_) => {
                warn!("persisted session is partial, clearing");
                self.clear();
                None
            }
            Err(err) => {
                warn!(error = %err, "persisted session is malformed, clearing");
                self.clear();
                None
            }
        }
    }

    /// Persists token and user as one atomic write (temp file + rename).
    pub fn save(&self, token: &str, user: &User) -> io::Result<()> {
        let session = PersistedSession {
            token: token.to_string(),
            user: user.clone(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(&session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;

        self.set_memory(Some(session));
        debug!(
            path = %self.path.display(),
            token = %safe_token_log(token),
            "session persisted"
        );
        Ok(())
    }

    /// Re-persists the cached user under the existing token.
    pub fn update_user(&self, user: &User) -> io::Result<()> {
        match self.token() {
            Some(token) => self.save(&token, user),
            None => Ok(()),
        }
    }

    /// Clears both persisted and in-memory state. Synchronous, and safe to
    /// call repeatedly or when nothing is stored.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(error = %err, "failed to remove session file");
            }
        }
        self.set_memory(None);
    }

    pub fn snapshot(&self) -> Option<PersistedSession> {
        self.state.read().ok().and_then(|guard| guard.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.snapshot().map(|session| session.user)
    }

    /// True when a well-formed token + user pair is held.
    pub fn has_credentials(&self) -> bool {
        self.snapshot().is_some()
    }

    fn set_memory(&self, value: Option<PersistedSession>) {
        if let Ok(mut guard) = self.state.write() {
            *guard = value;
        }
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        self.snapshot().map(|session| session.token)
    }
}

//! Session registry with JSON snapshot persistence.
//!
//! Sessions are held newest-first, the way the UI lists them. The whole
//! registry serializes to a single JSON document; a missing or corrupt
//! snapshot loads as an empty store rather than an error, since losing a
//! snapshot must never brick the app.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_types::{Result, RuleSet, SessionId, TallyError};

use crate::session::Session;

/// In-memory registry of sessions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and insert it at the front of the registry.
    ///
    /// # Errors
    /// [`TallyError::NoPlayers`] if `player_names` is empty.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        rules: RuleSet,
        player_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<SessionId> {
        let session = Session::new(name, rules, player_names)?;
        let id = session.id;
        self.sessions.insert(0, session);
        tracing::info!(session = %id, "session created");
        Ok(id)
    }

    pub fn get(&self, id: SessionId) -> Result<&Session> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or(TallyError::SessionNotFound(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(TallyError::SessionNotFound(id))
    }

    pub fn remove(&mut self, id: SessionId) -> Result<Session> {
        let idx = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(TallyError::SessionNotFound(id))?;
        Ok(self.sessions.remove(idx))
    }

    /// Delete every session.
    pub fn reset_all(&mut self) {
        let dropped = self.sessions.len();
        self.sessions.clear();
        tracing::info!(dropped, "all sessions reset");
    }

    /// Iterate sessions newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Serialize the registry to a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.sessions)?)
    }

    /// Deserialize a snapshot. Malformed JSON yields an empty store.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(sessions) => Self { sessions },
            Err(err) => {
                tracing::warn!(%err, "corrupt snapshot, starting empty");
                Self::new()
            }
        }
    }

    /// Write the snapshot to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }

    /// Load a snapshot from disk. A missing or unreadable file yields an
    /// empty store.
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(json) => Self::from_json(&json),
            Err(err) => {
                tracing::debug!(%err, "no snapshot, starting empty");
                Self::new()
            }
        }
    }
}

//! Saved game state, one slot per user and game type

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use strum::{Display, EnumString};
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::game::GameSnapshot;

/// Game types that have saved state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GameKind {
    Gomoku,
}

impl GameKind {
    /// Parse a game type name, rejecting anything unknown
    pub fn parse(kind: &str) -> Result<Self, StoreError> {
        Self::from_str(kind).map_err(|_| StoreError::InvalidGameType { kind: kind.to_string() })
    }
}

/// Per-user saved state: get, save and clear.
pub trait StateStore {
    /// Saved state, or `None` if nothing was saved
    fn load(&self, user: &str, kind: GameKind) -> Result<Option<GameSnapshot>, StoreError>;

    /// Insert or replace the saved state
    fn save(&self, user: &str, kind: GameKind, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// Remove the saved state; clearing nothing is not an error
    fn clear(&self, user: &str, kind: GameKind) -> Result<(), StoreError>;
}

/// User ids are used as directory names: plain ASCII word characters only.
pub fn validate_user(user: &str) -> Result<(), StoreError> {
    let ok = !user.is_empty()
        && user.len() <= 64
        && user.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidUser { user: user.to_string() })
    }
}

/// JSON files under `<root>/<user>/<kind>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, user: &str, kind: GameKind) -> Result<PathBuf, StoreError> {
        validate_user(user)?;
        Ok(self.root.join(user).join(format!("{kind}.json")))
    }
}

impl StateStore for JsonFileStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, user: &str, kind: GameKind) -> Result<Option<GameSnapshot>, StoreError> {
        let path = self.path(user, kind)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no saved state");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_str(&json)?;
        debug!(path = %path.display(), "loaded saved state");
        Ok(Some(snapshot))
    }

    #[instrument(skip(self, snapshot), fields(root = %self.root.display()))]
    fn save(&self, user: &str, kind: GameKind, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        let path = self.path(user, kind)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "saved state");
        Ok(())
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn clear(&self, user: &str, kind: GameKind) -> Result<(), StoreError> {
        let path = self.path(user, kind)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "cleared saved state");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and runs without a save directory
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<(String, GameKind), GameSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<(String, GameKind), GameSnapshot>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateStore for MemoryStore {
    fn load(&self, user: &str, kind: GameKind) -> Result<Option<GameSnapshot>, StoreError> {
        validate_user(user)?;
        Ok(self.slots().get(&(user.to_string(), kind)).cloned())
    }

    fn save(&self, user: &str, kind: GameKind, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        validate_user(user)?;
        self.slots().insert((user.to_string(), kind), snapshot.clone());
        Ok(())
    }

    fn clear(&self, user: &str, kind: GameKind) -> Result<(), StoreError> {
        validate_user(user)?;
        self.slots().remove(&(user.to_string(), kind));
        Ok(())
    }
}

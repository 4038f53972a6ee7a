use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::AppError;

/// Explicit session value object. Read once per navigation by the route
/// guard instead of through ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub is_logged_in: bool,
}

/// Persists the session flag as a small JSON file, standing in for the
/// original client-local storage. No expiry, no server validation.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        if let Some(path) = &config.session_file {
            return Ok(Self::new(path));
        }
        let dirs =
            ProjectDirs::from("", "", "jewelry-finder").ok_or(AppError::NoSessionDir)?;
        Ok(Self::new(dirs.data_dir().join("session.json")))
    }

    /// A missing store file reads as logged-out.
    pub fn load(&self) -> Result<SessionState, AppError> {
        if !self.path.exists() {
            log::debug!("No session file at {:?}; treating as logged out", self.path);
            return Ok(SessionState::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, state: SessionState) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(&state)?)?;
        log::debug!("Session state saved to {:?}: {:?}", self.path, state);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Route guard for the admin path.
pub fn require_admin(state: &SessionState) -> Result<(), AppError> {
    if state.is_logged_in {
        Ok(())
    } else {
        Err(AppError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let state = store.load().unwrap();
        assert!(!state.is_logged_in);
    }

    #[test]
    fn saved_state_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        store.save(SessionState { is_logged_in: true }).unwrap();
        assert!(store.load().unwrap().is_logged_in);

        store.save(SessionState { is_logged_in: false }).unwrap();
        assert!(!store.load().unwrap().is_logged_in);
    }

    #[test]
    fn guard_rejects_logged_out_sessions() {
        assert!(matches!(
            require_admin(&SessionState::default()),
            Err(AppError::NotLoggedIn)
        ));
        assert!(require_admin(&SessionState { is_logged_in: true }).is_ok());
    }
}

//! File-backed bearer credential store.
//!
//! The process-wide analogue of the platform's persistent key/value storage:
//! the token lives under the fixed `access_token` key and survives restarts.
//! The store is single-writer by construction and is re-consulted whenever
//! the in-memory copy is absent, so an externally replaced credential is
//! picked up on the next request.

use crate::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(default)]
    access_token: Option<String>,
}

/// Persistent bearer-token store under the client data directory.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("credentials.toml"),
        }
    }

    /// Read the stored token, if any.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ApiError::Store(format!("{}: {}", self.path.display(), e)))?;
        let stored: StoredCredentials =
            toml::from_str(&content).map_err(|e| ApiError::Store(e.to_string()))?;
        Ok(stored.access_token.filter(|t| !t.is_empty()))
    }

    /// Persist a token, replacing any previous one.
    pub fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::Store(format!("{}: {}", parent.display(), e)))?;
        }

        let stored = StoredCredentials {
            access_token: Some(token.to_string()),
        };
        let content = toml::to_string_pretty(&stored).map_err(|e| ApiError::Store(e.to_string()))?;
        std::fs::write(&self.path, content)
            .map_err(|e| ApiError::Store(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    /// Remove the stored token. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Store(format!("{}: {}", self.path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn store_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path());

        store.store("tok-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn clear_removes_token_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path());

        store.store("tok-123").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn empty_token_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path());

        store.store("").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}

//! Store file I/O
//!
//! Both local stores (credentials and session cookies) are whole-file JSON
//! documents under the booruswitch directory. Files carry 0600 permissions
//! since they hold passwords and session cookies.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::storage;
use crate::error::{Result, SwitchError};

/// Handles reading and writing one JSON store file
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// The credential store file in the default storage directory
    pub fn accounts() -> Self {
        Self {
            path: Self::storage_dir().join(storage::ACCOUNTS_FILE),
        }
    }

    /// The session cookie file in the default storage directory
    pub fn sessions() -> Self {
        Self {
            path: Self::storage_dir().join(storage::SESSIONS_FILE),
        }
    }

    /// Create a store with a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The storage directory: `$BOORUSWITCH_CONFIG_DIR`, else `~/.booruswitch`
    fn storage_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(storage::DIR_ENV_VAR) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(storage::DIR_NAME)
    }

    /// Load the store from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if !self.path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SwitchError::Storage(format!(
                "Failed to read store file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SwitchError::Storage(format!(
                "Failed to parse store file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Save the store to disk.
    /// Uses atomic write (tmp file + rename) and creates the parent dir if needed.
    pub fn save<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SwitchError::Storage(format!(
                    "Failed to create storage directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| SwitchError::Storage(format!("Failed to serialize store: {}", e)))?;

        // Atomic write: write to tmp file, then rename
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            SwitchError::Storage(format!(
                "Failed to write temp store file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Set 0600 permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                SwitchError::Storage(format!("Failed to set permissions on store file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            SwitchError::Storage(format!(
                "Failed to rename temp store file to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

//! Persisted session cookies
//!
//! The browser keeps its own cookie jar; the CLI keeps one cookie string per
//! site-family on disk instead, so a switched session is still active on the
//! next invocation. A failed switch never rewrites the stored string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::site::SiteFamily;
use crate::store::StoreFile;

/// On-disk shape: site-family → cookie string
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(flatten)]
    cookies: BTreeMap<SiteFamily, String>,
}

/// Read/write access to the persisted session cookies
pub struct SessionStore {
    file: StoreFile,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Open the default session store
    pub fn new() -> Self {
        Self {
            file: StoreFile::sessions(),
        }
    }

    /// Open a session store backed by a custom file (for testing)
    pub fn with_file(file: StoreFile) -> Self {
        Self { file }
    }

    /// The stored cookie string for a site-family, if any
    pub fn cookie(&self, family: SiteFamily) -> Result<Option<String>> {
        let sessions: SessionFile = self.file.load()?;
        Ok(sessions.cookies.get(&family).cloned())
    }

    /// Replace the stored cookie string for a site-family
    pub fn save_cookie(&self, family: SiteFamily, cookies: &str) -> Result<()> {
        let mut sessions: SessionFile = self.file.load()?;
        sessions.cookies.insert(family, cookies.to_string());
        self.file.save(&sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> SessionStore {
        SessionStore::with_file(StoreFile::with_path(dir.path().join("sessions.json")))
    }

    #[test]
    fn test_cookie_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(store.cookie(SiteFamily::Derpibooru).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_cookie() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store
            .save_cookie(SiteFamily::Derpibooru, "_booru_session=abc")
            .unwrap();

        let loaded = store.cookie(SiteFamily::Derpibooru).unwrap();
        assert_eq!(loaded, Some("_booru_session=abc".to_string()));
    }

    #[test]
    fn test_families_keep_separate_cookies() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store
            .save_cookie(SiteFamily::Derpibooru, "_booru_session=derpi")
            .unwrap();
        store
            .save_cookie(SiteFamily::Ponybooru, "_booru_session=pony")
            .unwrap();

        assert_eq!(
            store.cookie(SiteFamily::Derpibooru).unwrap(),
            Some("_booru_session=derpi".to_string())
        );
        assert_eq!(
            store.cookie(SiteFamily::Ponybooru).unwrap(),
            Some("_booru_session=pony".to_string())
        );
        assert!(store.cookie(SiteFamily::Ponerpics).unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_existing_cookie() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store
            .save_cookie(SiteFamily::Ponerpics, "_booru_session=old")
            .unwrap();
        store
            .save_cookie(SiteFamily::Ponerpics, "_booru_session=new")
            .unwrap();

        assert_eq!(
            store.cookie(SiteFamily::Ponerpics).unwrap(),
            Some("_booru_session=new".to_string())
        );
    }
}

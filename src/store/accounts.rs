//! Credential operations over one site-family partition

use clap::ValueEnum;
use log::debug;

use crate::error::Result;
use crate::site::SiteFamily;

use super::file::StoreFile;
use super::models::{Credential, CredentialFile};

/// Reorder direction for [`AccountStore::move_account`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Swap with the previous entry
    Up,
    /// Swap with the next entry
    Down,
}

/// CRUD and reorder operations for one site-family's credential list.
///
/// Every operation reads the whole store file at entry and persists it whole
/// after a mutation; no operation assumes a prior read is still fresh.
pub struct AccountStore {
    file: StoreFile,
    family: SiteFamily,
}

impl AccountStore {
    /// Open the default credential store for a site-family
    pub fn new(family: SiteFamily) -> Self {
        Self {
            file: StoreFile::accounts(),
            family,
        }
    }

    /// Open a credential store backed by a custom file (for testing)
    pub fn with_file(file: StoreFile, family: SiteFamily) -> Self {
        Self { file, family }
    }

    /// All credentials for this site-family, in display order
    pub fn list(&self) -> Result<Vec<Credential>> {
        let store: CredentialFile = self.file.load()?;
        Ok(store.partition(self.family).to_vec())
    }

    /// Append a credential to the end of the partition.
    ///
    /// Returns false and leaves the store untouched when a credential with
    /// the same email already exists.
    pub fn add(&self, credential: Credential) -> Result<bool> {
        let mut store: CredentialFile = self.file.load()?;
        let partition = store.partition_mut(self.family);
        if partition.iter().any(|c| c.email == credential.email) {
            debug!(
                "Refusing to add duplicate account '{}' for {}",
                credential.email, self.family
            );
            return Ok(false);
        }
        partition.push(credential);
        self.file.save(&store)?;
        Ok(true)
    }

    /// Look up a credential by email
    pub fn find(&self, email: &str) -> Result<Option<Credential>> {
        let store: CredentialFile = self.file.load()?;
        Ok(store
            .partition(self.family)
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }

    /// Remove the credential with the given email.
    ///
    /// Returns whether an entry was removed; an absent email is a tolerated
    /// no-op, not an error.
    pub fn remove(&self, email: &str) -> Result<bool> {
        let mut store: CredentialFile = self.file.load()?;
        let partition = store.partition_mut(self.family);
        let Some(index) = partition.iter().position(|c| c.email == email) else {
            return Ok(false);
        };
        partition.remove(index);
        self.file.save(&store)?;
        Ok(true)
    }

    /// Swap the credential with its neighbor in the given direction.
    ///
    /// Returns whether a swap happened; moving the first entry up, the last
    /// entry down, or an unknown email is a no-op.
    pub fn move_account(&self, email: &str, direction: Direction) -> Result<bool> {
        let mut store: CredentialFile = self.file.load()?;
        let partition = store.partition_mut(self.family);
        let Some(index) = partition.iter().position(|c| c.email == email) else {
            return Ok(false);
        };

        let sibling = match direction {
            Direction::Up => {
                if index == 0 {
                    return Ok(false);
                }
                index - 1
            }
            Direction::Down => {
                if index + 1 == partition.len() {
                    return Ok(false);
                }
                index + 1
            }
        };

        partition.swap(index, sibling);
        self.file.save(&store)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir, family: SiteFamily) -> AccountStore {
        AccountStore::with_file(
            StoreFile::with_path(dir.path().join("accounts.json")),
            family,
        )
    }

    fn cred(email: &str) -> Credential {
        Credential {
            display_name: format!("name of {}", email),
            email: email.to_string(),
            password: "pw".to_string(),
            avatar: String::new(),
        }
    }

    fn emails(store: &AccountStore) -> Vec<String> {
        store.list().unwrap().into_iter().map(|c| c.email).collect()
    }

    #[test]
    fn test_list_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_find_returns_credential_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);

        let credential = Credential {
            display_name: "Main".to_string(),
            email: "main@example.org".to_string(),
            password: "s3cret".to_string(),
            avatar: "https://derpicdn.net/avatars/main.png".to_string(),
        };
        assert!(store.add(credential.clone()).unwrap());

        let found = store.find("main@example.org").unwrap().unwrap();
        assert_eq!(found, credential);
    }

    #[test]
    fn test_add_duplicate_email_fails_without_mutation() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);

        assert!(store.add(cred("a@x.org")).unwrap());
        assert!(store.add(cred("b@x.org")).unwrap());

        let mut duplicate = cred("a@x.org");
        duplicate.display_name = "different label".to_string();
        assert!(!store.add(duplicate).unwrap());

        // Length and order unaffected
        assert_eq!(emails(&store), vec!["a@x.org", "b@x.org"]);
        let original = store.find("a@x.org").unwrap().unwrap();
        assert_eq!(original.display_name, "name of a@x.org");
    }

    #[test]
    fn test_add_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Ponybooru);
        for email in ["first@x.org", "second@x.org", "third@x.org"] {
            store.add(cred(email)).unwrap();
        }
        assert_eq!(
            emails(&store),
            vec!["first@x.org", "second@x.org", "third@x.org"]
        );
    }

    #[test]
    fn test_find_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        store.add(cred("a@x.org")).unwrap();
        assert!(store.find("missing@x.org").unwrap().is_none());
    }

    #[test]
    fn test_remove_existing() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        store.add(cred("a@x.org")).unwrap();
        store.add(cred("b@x.org")).unwrap();

        assert!(store.remove("a@x.org").unwrap());
        assert_eq!(emails(&store), vec!["b@x.org"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        store.add(cred("a@x.org")).unwrap();
        store.add(cred("b@x.org")).unwrap();

        assert!(!store.remove("missing@x.org").unwrap());
        // Store before and after are structurally identical
        assert_eq!(emails(&store), vec!["a@x.org", "b@x.org"]);
    }

    #[test]
    fn test_move_up_swaps_with_predecessor() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        for email in ["a@x.org", "b@x.org", "c@x.org"] {
            store.add(cred(email)).unwrap();
        }

        assert!(store.move_account("b@x.org", Direction::Up).unwrap());
        assert_eq!(emails(&store), vec!["b@x.org", "a@x.org", "c@x.org"]);
    }

    #[test]
    fn test_move_down_swaps_with_successor() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        for email in ["a@x.org", "b@x.org", "c@x.org"] {
            store.add(cred(email)).unwrap();
        }

        assert!(store.move_account("a@x.org", Direction::Down).unwrap());
        assert_eq!(emails(&store), vec!["b@x.org", "a@x.org", "c@x.org"]);
    }

    #[test]
    fn test_move_first_up_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        for email in ["a@x.org", "b@x.org"] {
            store.add(cred(email)).unwrap();
        }

        assert!(!store.move_account("a@x.org", Direction::Up).unwrap());
        assert_eq!(emails(&store), vec!["a@x.org", "b@x.org"]);
    }

    #[test]
    fn test_move_last_down_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        for email in ["a@x.org", "b@x.org"] {
            store.add(cred(email)).unwrap();
        }

        assert!(!store.move_account("b@x.org", Direction::Down).unwrap());
        assert_eq!(emails(&store), vec!["a@x.org", "b@x.org"]);
    }

    #[test]
    fn test_move_unknown_email_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, SiteFamily::Derpibooru);
        store.add(cred("a@x.org")).unwrap();
        assert!(!store.move_account("missing@x.org", Direction::Down).unwrap());
    }

    #[test]
    fn test_families_do_not_share_accounts() {
        let dir = TempDir::new().unwrap();
        let derpi = test_store(&dir, SiteFamily::Derpibooru);
        let pony = AccountStore::with_file(
            StoreFile::with_path(dir.path().join("accounts.json")),
            SiteFamily::Ponybooru,
        );

        derpi.add(cred("shared@x.org")).unwrap();

        assert!(pony.list().unwrap().is_empty());
        // Same email can exist in two partitions independently
        assert!(pony.add(cred("shared@x.org")).unwrap());
        assert_eq!(derpi.list().unwrap().len(), 1);
        assert_eq!(pony.list().unwrap().len(), 1);
    }

    #[test]
    fn test_mutations_are_visible_to_a_fresh_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.json");

        let writer = AccountStore::with_file(
            StoreFile::with_path(path.clone()),
            SiteFamily::Ponerpics,
        );
        writer.add(cred("a@x.org")).unwrap();

        // A separately-opened store sees the persisted state
        let reader =
            AccountStore::with_file(StoreFile::with_path(path), SiteFamily::Ponerpics);
        assert_eq!(emails(&reader), vec!["a@x.org"]);
    }
}

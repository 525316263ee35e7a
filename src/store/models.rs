//! Credential store data models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::site::SiteFamily;

/// One stored account for one site-family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Free-text label shown in listings
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Unique identifier within the site-family partition
    pub email: String,
    /// Stored as-is; this is a local convenience store, not an auth boundary
    pub password: String,
    /// Avatar image URL; empty means none
    #[serde(default)]
    pub avatar: String,
}

/// The whole credential store: one ordered credential list per site-family
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialFile {
    #[serde(flatten)]
    accounts: BTreeMap<SiteFamily, Vec<Credential>>,
}

impl Default for CredentialFile {
    fn default() -> Self {
        let mut accounts = BTreeMap::new();
        for family in SiteFamily::all() {
            accounts.insert(family, Vec::new());
        }
        Self { accounts }
    }
}

impl CredentialFile {
    /// The ordered credential list for one site-family
    pub fn partition(&self, family: SiteFamily) -> &[Credential] {
        self.accounts.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to one site-family's list, created empty if a hand-edited
    /// file dropped the partition
    pub fn partition_mut(&mut self, family: SiteFamily) -> &mut Vec<Credential> {
        self.accounts.entry(family).or_default()
    }
}

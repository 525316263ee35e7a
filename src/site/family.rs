//! Site-family classification from hostnames

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwitchError};

/// Hostnames belonging to each site-family
const PONYBOORU_HOSTS: &[&str] = &["ponybooru.org"];
const PONERPICS_HOSTS: &[&str] = &["ponerpics.org", "ponerpics.com"];
const DERPIBOORU_HOSTS: &[&str] = &["derpibooru.org", "trixiebooru.org"];

/// One of the three recognized site-families.
///
/// Credentials and session cookies are partitioned per family, so an account
/// stored for one family is never offered on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteFamily {
    Ponybooru,
    Ponerpics,
    Derpibooru,
}

impl SiteFamily {
    /// Classify a hostname into its site-family.
    ///
    /// Matching is case-insensitive and tolerates a `www.` prefix. An
    /// unrecognized hostname is fatal for the invocation.
    pub fn classify(hostname: &str) -> Result<Self> {
        let host = hostname.trim_end_matches('.');
        let bare = host.strip_prefix("www.").unwrap_or(host);

        let matches = |candidates: &[&str]| {
            candidates.iter().any(|c| bare.eq_ignore_ascii_case(c))
        };

        if matches(PONYBOORU_HOSTS) {
            Ok(SiteFamily::Ponybooru)
        } else if matches(PONERPICS_HOSTS) {
            Ok(SiteFamily::Ponerpics)
        } else if matches(DERPIBOORU_HOSTS) {
            Ok(SiteFamily::Derpibooru)
        } else {
            Err(SwitchError::UnsupportedSite(hostname.to_string()))
        }
    }

    /// All site-families, in partition order
    pub fn all() -> [SiteFamily; 3] {
        [
            SiteFamily::Ponybooru,
            SiteFamily::Ponerpics,
            SiteFamily::Derpibooru,
        ]
    }

    /// Stable identifier used as the partition key in store files
    pub fn key(&self) -> &'static str {
        match self {
            SiteFamily::Ponybooru => "ponybooru",
            SiteFamily::Ponerpics => "ponerpics",
            SiteFamily::Derpibooru => "derpibooru",
        }
    }
}

impl fmt::Display for SiteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

//! Local credential storage
//!
//! Credentials are partitioned per site-family and kept in a single JSON
//! file. Every operation re-reads the whole file and writes it back whole;
//! there is no in-memory cache, so concurrent invocations degrade to last
//! write wins.

mod accounts;
pub mod commands;
mod file;
mod models;

pub use accounts::{AccountStore, Direction};
pub use commands::run_account_command;
pub use file::StoreFile;
pub use models::{Credential, CredentialFile};

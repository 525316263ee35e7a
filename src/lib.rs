//! booruswitch - Switch between stored booru accounts
//!
//! A CLI that keeps login credentials for the supported Philomena
//! site-families in a local store and drives a site's own session endpoints
//! to switch the active session between them.
//!
//! # Features
//!
//! - Per-site-family credential store with ordering (add, remove, reorder)
//! - Session switching with automatic logout and CSRF token handling
//! - TOTP second-factor completion
//! - Persisted session cookies, so a switch survives across invocations
//!
//! # Example
//!
//! ```bash
//! # Store an account for derpibooru
//! booruswitch account add --name Main --email main@example.org
//!
//! # List stored accounts
//! booruswitch account list
//!
//! # Switch the active session
//! booruswitch switch main@example.org
//!
//! # Operate on another site-family
//! booruswitch -H ponerpics.org account list
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod site;
pub mod store;
pub mod ui;

pub use cli::{AccountAction, AddArgs, Cli, Command, MoveArgs, RemoveArgs, SwitchArgs};
pub use error::{Result, SwitchError};
pub use session::{
    run_status_command, run_switch_command, FormResponse, SessionStore, SiteClient, SwitchOutcome,
    Switcher, TokenRefresh,
};
pub use site::{Page, SiteFamily};
pub use store::{
    run_account_command, AccountStore, Credential, CredentialFile, Direction, StoreFile,
};

//! Session switching
//!
//! Drives the site's own session endpoints (logout, login, TOTP) to move the
//! active session onto a stored credential. The protocol is one linear async
//! pass; the only tolerated irregularity is a 403 during logout, which is
//! recovered by fetching a fresh token.

mod client;
pub mod commands;
mod state;
mod switcher;

pub use client::{FormResponse, SiteClient};
pub use commands::{run_status_command, run_switch_command};
pub use state::SessionStore;
pub use switcher::{SwitchOutcome, Switcher, TokenRefresh};

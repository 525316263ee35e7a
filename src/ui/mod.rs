//! UI utilities for terminal output
//!
//! Progress spinners for the network phases and confirmation prompts for
//! destructive store operations.

mod confirm;
mod spinner;

pub use confirm::confirm_action;
pub use spinner::{clear_spinner, create_spinner, finish_spinner};

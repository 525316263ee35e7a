//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::config::defaults;
use crate::store::Direction;

/// Booru account switcher CLI
#[derive(Parser, Debug)]
#[command(name = "booruswitch")]
#[command(version)]
#[command(about = "Store booru accounts locally and switch the active site session", long_about = None)]
pub struct Cli {
    /// Site hostname to operate on
    #[arg(
        short = 'H',
        long,
        global = true,
        env = defaults::HOST_ENV_VAR,
        default_value = defaults::HOST
    )]
    pub host: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress progress output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage stored accounts for the site
    #[command(subcommand)]
    Account(AccountAction),

    /// Switch the active site session to a stored account
    Switch(SwitchArgs),

    /// Report whether a user is currently signed in on the site
    Status,
}

/// Account store subcommands
#[derive(Subcommand, Debug)]
pub enum AccountAction {
    /// List stored accounts in display order
    List,

    /// Store a new account
    Add(AddArgs),

    /// Delete a stored account
    Remove(RemoveArgs),

    /// Move a stored account up or down in the display order
    Move(MoveArgs),
}

/// Arguments for 'account add'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        booruswitch account add --name Main --email main@example.org\n  \
        booruswitch -H ponerpics.org account add   # prompts for all fields")]
pub struct AddArgs {
    /// Display label (prompted for when omitted)
    #[arg(long)]
    pub name: Option<String>,
    /// Account email (prompted for when omitted)
    #[arg(long)]
    pub email: Option<String>,
    /// Account password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,
    /// Avatar image URL
    #[arg(long)]
    pub avatar: Option<String>,
}

/// Arguments for 'account remove'
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Email of the account to delete
    pub email: String,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for 'account move'
#[derive(Parser, Debug)]
pub struct MoveArgs {
    /// Direction to move the account in
    #[arg(value_enum)]
    pub direction: Direction,
    /// Email of the account to move
    pub email: String,
}

/// Arguments for 'switch'
#[derive(Parser, Debug)]
pub struct SwitchArgs {
    /// Email of the stored account to switch to
    pub email: String,
}

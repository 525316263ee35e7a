//! Account command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::cli::{AccountAction, AddArgs, MoveArgs, RemoveArgs};
use crate::error::SwitchError;
use crate::site::SiteFamily;
use crate::ui::confirm_action;

use super::accounts::{AccountStore, Direction};
use super::models::Credential;

/// Dispatch account subcommands
pub fn run_account_command(
    host: &str,
    action: &AccountAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let family = SiteFamily::classify(host)?;
    let store = AccountStore::new(family);
    match action {
        AccountAction::List => run_account_list(&store, family),
        AccountAction::Add(args) => run_account_add(&store, args),
        AccountAction::Remove(args) => run_account_remove(&store, args),
        AccountAction::Move(args) => run_account_move(&store, args),
    }
}

/// List stored accounts in display order
fn run_account_list(
    store: &AccountStore,
    family: SiteFamily,
) -> Result<(), Box<dyn std::error::Error>> {
    let accounts = store.list()?;

    if accounts.is_empty() {
        println!("No accounts stored for {}.", family);
        println!("\nUse 'booruswitch account add' to store one.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#"),
            Cell::new("NAME"),
            Cell::new("EMAIL"),
            Cell::new("PASSWORD"),
            Cell::new("AVATAR"),
        ]);

    for (index, account) in accounts.iter().enumerate() {
        let avatar_display = if account.avatar.is_empty() {
            "<none>"
        } else {
            account.avatar.as_str()
        };

        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&account.display_name),
            Cell::new(&account.email),
            Cell::new(mask_password(&account.password)),
            Cell::new(avatar_display),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Store a new account, prompting for any field not given as a flag
fn run_account_add(store: &AccountStore, args: &AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Display name")
            .interact_text()?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(SwitchError::Config("Display name must not be blank".to_string()).into());
    }

    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(SwitchError::Config("Email must not be blank".to_string()).into());
    }

    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let credential = Credential {
        display_name: name,
        email: email.clone(),
        password,
        avatar: args.avatar.clone().unwrap_or_default(),
    };

    if store.add(credential)? {
        println!("✓ Stored account '{}'", email);
        Ok(())
    } else {
        Err(SwitchError::Config(format!(
            "An account with email '{}' is already stored for this site",
            email
        ))
        .into())
    }
}

/// Delete a stored account after confirmation
fn run_account_remove(
    store: &AccountStore,
    args: &RemoveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes && !confirm_action(&format!("Delete stored account '{}'?", args.email)) {
        println!("Aborted.");
        return Ok(());
    }

    if store.remove(&args.email)? {
        println!("✓ Removed account '{}'", args.email);
    } else {
        println!("No account '{}' stored; nothing removed.", args.email);
    }
    Ok(())
}

/// Reorder a stored account
fn run_account_move(
    store: &AccountStore,
    args: &MoveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let direction = match args.direction {
        Direction::Up => "up",
        Direction::Down => "down",
    };

    if store.move_account(&args.email, args.direction)? {
        println!("✓ Moved account '{}' {}", args.email, direction);
    } else {
        println!(
            "Account '{}' was not moved (unknown email or already at the edge).",
            args.email
        );
    }
    Ok(())
}

/// Mask a stored password for display
fn mask_password(password: &str) -> &'static str {
    if password.is_empty() {
        "<empty>"
    } else {
        "********"
    }
}

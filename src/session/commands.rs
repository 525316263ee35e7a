//! Switch and status command handlers

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use log::info;

use crate::cli::SwitchArgs;
use crate::error::SwitchError;
use crate::site::SiteFamily;
use crate::store::AccountStore;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::client::SiteClient;
use super::state::SessionStore;
use super::switcher::{SwitchOutcome, Switcher};

/// Run the switch protocol for a stored account
pub async fn run_switch_command(
    host: &str,
    args: &SwitchArgs,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let family = SiteFamily::classify(host)?;

    let accounts = AccountStore::new(family);
    let credential = accounts.find(&args.email)?.ok_or_else(|| {
        SwitchError::Config(format!(
            "No account '{}' stored for {}. Use 'booruswitch account add' first.",
            args.email, family
        ))
    })?;

    let sessions = SessionStore::new();
    let client = SiteClient::new(host.to_string());
    if let Some(cookies) = sessions.cookie(family)? {
        client.seed_cookies(&cookies)?;
    }

    let switcher = Switcher::new(&client);
    let spinner = create_spinner(
        &format!("Switching to '{}'...", credential.display_name),
        quiet,
    );
    let outcome = match switcher.switch_to(&credential).await {
        Ok(outcome) => outcome,
        Err(e) => {
            clear_spinner(spinner);
            return Err(e.into());
        }
    };

    match outcome {
        SwitchOutcome::Completed => {
            finish_spinner(spinner, "Login accepted");
        }
        SwitchOutcome::NotPerformed => {
            finish_spinner(spinner, "No usable session token; nothing was changed");
            return Ok(());
        }
        SwitchOutcome::SecondFactorPending { token } => {
            clear_spinner(spinner);
            let code: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Two-factor code")
                .interact_text()?;

            let spinner = create_spinner("Submitting two-factor code...", quiet);
            if let Err(e) = switcher.complete_second_factor(&token, code.trim()).await {
                clear_spinner(spinner);
                return Err(e.into());
            }
            finish_spinner(spinner, "Two-factor accepted");
        }
    }

    if let Some(cookies) = client.cookie_string()? {
        sessions.save_cookie(family, &cookies)?;
    }

    // Where the browser would reload, re-fetch to confirm the new session
    let page = client.fetch_page("/").await?;
    if page.user_signed_in() {
        println!(
            "✓ Switched to '{}' on {}",
            credential.display_name, host
        );
    } else {
        println!(
            "Login was accepted but {} does not report a signed-in session.",
            host
        );
    }
    info!("Switch flow finished for {}", credential.email);
    Ok(())
}

/// Report the site's signed-in marker for the stored session
pub async fn run_status_command(
    host: &str,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let family = SiteFamily::classify(host)?;

    let sessions = SessionStore::new();
    let client = SiteClient::new(host.to_string());
    if let Some(cookies) = sessions.cookie(family)? {
        client.seed_cookies(&cookies)?;
    }

    let spinner = create_spinner(&format!("Checking {}...", host), quiet);
    let page = match client.fetch_page("/").await {
        Ok(page) => page,
        Err(e) => {
            clear_spinner(spinner);
            return Err(e.into());
        }
    };
    clear_spinner(spinner);

    if page.user_signed_in() {
        println!("A user is signed in on {}", host);
    } else {
        println!("No user is signed in on {}", host);
    }
    Ok(())
}

//! User confirmation prompts for destructive operations

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

/// Ask the user to confirm an action; declining is the default.
///
/// Returns false when the prompt cannot be shown (e.g. no TTY).
pub fn confirm_action(prompt: &str) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

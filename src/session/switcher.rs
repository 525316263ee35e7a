//! The session-switch protocol

use log::{debug, info};

use crate::config::endpoints;
use crate::error::{Result, SwitchError};
use crate::site::Page;
use crate::store::Credential;

use super::client::SiteClient;

/// Outcome of a switch attempt
#[derive(Debug)]
pub enum SwitchOutcome {
    /// The login succeeded outright; the caller should refresh session state
    Completed,
    /// The site demands a TOTP code; `token` must accompany the submission
    SecondFactorPending { token: String },
    /// No usable token was obtained; nothing was changed
    NotPerformed,
}

/// How a usable token was obtained when a logout was needed
#[derive(Debug)]
pub enum TokenRefresh {
    /// Logout succeeded; token taken from the logout response body
    Renewed(String),
    /// Logout answered 403 (session already gone); token taken from a fresh
    /// unauthenticated page fetch
    Recovered(String),
}

impl TokenRefresh {
    fn into_token(self) -> String {
        match self {
            TokenRefresh::Renewed(token) | TokenRefresh::Recovered(token) => token,
        }
    }
}

/// Protocol engine for moving the active session onto a stored credential.
///
/// One linear pass per attempt: acquire token, log out if a user is signed
/// in, submit the login, surface a TOTP challenge if the site redirects to
/// one. Nothing is retried; any untolerated status aborts with the session
/// left as it was.
pub struct Switcher<'a> {
    client: &'a SiteClient,
}

impl<'a> Switcher<'a> {
    pub fn new(client: &'a SiteClient) -> Self {
        Self { client }
    }

    /// Run the switch protocol for one credential
    pub async fn switch_to(&self, credential: &Credential) -> Result<SwitchOutcome> {
        let page = self.client.fetch_page("/").await?;
        let mut token = page
            .csrf_token()
            .ok_or(SwitchError::MissingToken("the current page"))?;

        if page.user_signed_in() {
            debug!("A user is signed in; logging out first");
            token = self.logout(&token).await?.into_token();
        }

        if token.is_empty() {
            debug!("No usable token after logout; treating switch as not performed");
            return Ok(SwitchOutcome::NotPerformed);
        }

        info!("Submitting login for {}", credential.email);
        let response = self
            .client
            .post_form(
                endpoints::SESSIONS,
                &[
                    ("_csrf_token", token.as_str()),
                    ("user[email]", credential.email.as_str()),
                    ("user[password]", credential.password.as_str()),
                    ("user[remember_me]", "true"),
                ],
            )
            .await?;

        if response.status != 200 {
            return Err(SwitchError::UnexpectedStatus {
                status: response.status,
                context: "login",
            });
        }

        if response
            .final_url
            .path()
            .ends_with(endpoints::TOTP_CHALLENGE_SUFFIX)
        {
            debug!("Login redirected to the TOTP challenge");
            let token = Page::new(response.body)
                .totp_form_token()
                .ok_or(SwitchError::MissingToken("the second-factor challenge page"))?;
            return Ok(SwitchOutcome::SecondFactorPending { token });
        }

        Ok(SwitchOutcome::Completed)
    }

    /// Issue a method-override logout and obtain the next usable token.
    ///
    /// Logout invalidates the prior token, so the 200 path reads a new one
    /// out of the response body. A 403 means the session was already gone
    /// (e.g. expired in another tab); that case recovers with a fresh
    /// unauthenticated page fetch. Any other status is fatal.
    async fn logout(&self, token: &str) -> Result<TokenRefresh> {
        let response = self
            .client
            .post_form(
                endpoints::SESSIONS,
                &[("_csrf_token", token), ("_method", "delete")],
            )
            .await?;

        match response.status {
            200 => {
                let token = Page::new(response.body)
                    .csrf_token()
                    .ok_or(SwitchError::MissingToken("the logout response"))?;
                Ok(TokenRefresh::Renewed(token))
            }
            403 => {
                debug!("Logout answered 403; refetching for a fresh token");
                let page = self.client.fetch_page("/").await?;
                let token = page
                    .csrf_token()
                    .ok_or(SwitchError::MissingToken("the recovery page"))?;
                Ok(TokenRefresh::Recovered(token))
            }
            status => Err(SwitchError::UnexpectedStatus {
                status,
                context: "logout",
            }),
        }
    }

    /// Submit a TOTP code to finish a pending switch.
    ///
    /// `token` is the value returned with
    /// [`SwitchOutcome::SecondFactorPending`].
    pub async fn complete_second_factor(&self, token: &str, code: &str) -> Result<()> {
        let response = self
            .client
            .post_form(
                endpoints::TOTP,
                &[
                    ("_csrf_token", token),
                    ("user[twofactor_token]", code),
                    ("user[remember_me]", "true"),
                ],
            )
            .await?;

        if response.status != 200 {
            return Err(SwitchError::UnexpectedStatus {
                status: response.status,
                context: "second-factor submission",
            });
        }

        Ok(())
    }
}

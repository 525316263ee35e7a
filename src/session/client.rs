//! HTTP client for site session endpoints

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Url};

use crate::error::{Result, SwitchError};
use crate::site::Page;

/// Response to a form submission, after redirects were followed
#[derive(Debug)]
pub struct FormResponse {
    /// Final status code
    pub status: u16,
    /// URL the response chain landed on
    pub final_url: Url,
    /// Response body
    pub body: String,
}

/// Site HTTP client
///
/// Owns a cookie jar so session cookies set on intermediate redirect
/// responses are kept; the jar contents can be seeded from and drained back
/// into the persisted session store.
pub struct SiteClient {
    client: Client,
    host: String,
    jar: Arc<Jar>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl SiteClient {
    /// Create a new client for the given site host
    pub fn new(host: String) -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            host,
            jar,
            base_url_override: None,
        }
    }

    /// Create a client with a custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(host: String, base_url: String) -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            host,
            jar,
            base_url_override: Some(base_url),
        }
    }

    /// Create a test client against a mock server
    #[cfg(test)]
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("mock.derpibooru.org".to_string(), base_url.to_string())
    }

    /// The site origin requests are issued against
    pub fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}", self.host)
    }

    /// The host this client was created for
    pub fn host(&self) -> &str {
        &self.host
    }

    fn origin(&self) -> Result<Url> {
        Url::parse(&self.base_url())
            .map_err(|e| SwitchError::Config(format!("Invalid site origin: {}", e)))
    }

    /// Seed the cookie jar from a persisted `name=value; name2=value2` string
    pub fn seed_cookies(&self, cookies: &str) -> Result<()> {
        let origin = self.origin()?;
        for cookie in cookies.split(';') {
            let cookie = cookie.trim();
            if !cookie.is_empty() {
                self.jar.add_cookie_str(cookie, &origin);
            }
        }
        Ok(())
    }

    /// The jar's current cookies for the site origin, as a persistable string
    pub fn cookie_string(&self) -> Result<Option<String>> {
        let origin = self.origin()?;
        Ok(self
            .jar
            .cookies(&origin)
            .and_then(|header| header.to_str().map(str::to_string).ok()))
    }

    /// Fetch a page from the site.
    ///
    /// The status code is not checked here; the protocol reads tokens out of
    /// whatever document came back.
    pub async fn fetch_page(&self, path: &str) -> Result<Page> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching page: {}", url);

        let response = self.client.get(&url).send().await?;
        debug!("Page {} returned status {}", url, response.status());

        Ok(Page::new(response.text().await?))
    }

    /// Submit a URL-encoded form and return the final response
    pub async fn post_form(&self, path: &str, params: &[(&str, &str)]) -> Result<FormResponse> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Posting form to: {}", url);

        let response = self.client.post(&url).form(params).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        debug!("Form post to {} landed on {} with status {}", url, final_url, status);

        Ok(FormResponse {
            status,
            final_url,
            body: response.text().await?,
        })
    }
}

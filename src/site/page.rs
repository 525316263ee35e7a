//! Extraction of tokens and markers from rendered site pages
//!
//! Philomena renders an anti-forgery token in a `csrf-token` meta tag on
//! every page, a `data-user-is-signed-in` attribute on its client-side
//! datastore element, and a hidden `_csrf_token` input on the TOTP challenge
//! form. The relevant values are pulled out by marker scanning; nothing else
//! from the page is needed, so there is no full HTML parse.

/// A fetched page body
#[derive(Debug)]
pub struct Page {
    body: String,
}

impl Page {
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// The anti-forgery token from the `csrf-token` meta tag, if present
    pub fn csrf_token(&self) -> Option<String> {
        find_tag(&self.body, "<meta", |tag| {
            has_attr_value(tag, "name", "csrf-token")
        })
        .and_then(|tag| attr_value(tag, "content"))
    }

    /// Whether the page's datastore marker says a user is signed in.
    ///
    /// Absence of the marker reads as signed out.
    pub fn user_signed_in(&self) -> bool {
        attr_value(&self.body, "data-user-is-signed-in")
            .is_some_and(|v| v == "true")
    }

    /// The `_csrf_token` hidden input value from the TOTP challenge form
    pub fn totp_form_token(&self) -> Option<String> {
        find_tag(&self.body, "<input", |tag| {
            has_attr_value(tag, "name", "_csrf_token")
        })
        .and_then(|tag| attr_value(tag, "value"))
    }
}

/// Find the first `opener`-delimited tag for which `pred` holds.
///
/// Returns the tag's text from the opener up to (not including) the closing
/// `>`.
fn find_tag<'a>(html: &'a str, opener: &str, pred: impl Fn(&str) -> bool) -> Option<&'a str> {
    let mut rest = html;
    while let Some(start) = rest.find(opener) {
        let candidate = &rest[start..];
        let end = candidate.find('>')?;
        let tag = &candidate[..end];
        if pred(tag) {
            return Some(tag);
        }
        rest = &candidate[end..];
    }
    None
}

/// Extract the value of a double-quoted attribute from a tag slice
fn attr_value(tag: &str, attr: &str) -> Option<String> {
    let marker = format!("{}=\"", attr);
    let start = tag.find(&marker)? + marker.len();
    let remaining = &tag[start..];
    let end = remaining.find('"')?;
    Some(remaining[..end].to_string())
}

fn has_attr_value(tag: &str, attr: &str, expected: &str) -> bool {
    attr_value(tag, attr).is_some_and(|v| v == expected)
}

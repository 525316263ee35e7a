//! Site-family classification and page inspection
//!
//! The switcher only operates on the three supported Philomena site-families;
//! everything it needs from a rendered page (CSRF token, signed-in marker)
//! is read here.

mod family;
mod page;

pub use family::SiteFamily;
pub use page::Page;

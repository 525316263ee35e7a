use std::fmt;

/// Custom error type for switcher operations
#[derive(Debug)]
pub enum SwitchError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Hostname does not belong to any supported site-family
    UnsupportedSite(String),
    /// Expected anti-forgery token missing from a page
    MissingToken(&'static str),
    /// Endpoint answered with a status the protocol does not tolerate
    UnexpectedStatus { status: u16, context: &'static str },
    /// Failed to read or write a local store file
    Storage(String),
    /// JSON parsing error
    Json(String),
    /// Configuration or usage error
    Config(String),
}

impl fmt::Display for SwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SwitchError::UnsupportedSite(hostname) => write!(
                f,
                "hostname '{}' could not be matched to a supported site",
                hostname
            ),
            SwitchError::MissingToken(context) => {
                write!(f, "CSRF token not found in {}", context)
            }
            SwitchError::UnexpectedStatus { status, context } => {
                write!(f, "Unexpected status code {} during {}", status, context)
            }
            SwitchError::Storage(msg) => write!(f, "{}", msg),
            SwitchError::Json(msg) => write!(f, "JSON error: {}", msg),
            SwitchError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SwitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwitchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SwitchError {
    fn from(err: reqwest::Error) -> Self {
        SwitchError::Http(err)
    }
}

impl From<serde_json::Error> for SwitchError {
    fn from(err: serde_json::Error) -> Self {
        SwitchError::Json(err.to_string())
    }
}

impl From<std::io::Error> for SwitchError {
    fn from(err: std::io::Error) -> Self {
        SwitchError::Storage(err.to_string())
    }
}

/// Result type alias for switcher operations
pub type Result<T> = std::result::Result<T, SwitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_site_display() {
        let err = SwitchError::UnsupportedSite("example.com".to_string());
        assert!(err.to_string().contains("example.com"));
        assert!(err.to_string().contains("supported site"));
    }

    #[test]
    fn test_missing_token_display() {
        let err = SwitchError::MissingToken("the login page");
        assert!(err.to_string().contains("CSRF token"));
        assert!(err.to_string().contains("the login page"));
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = SwitchError::UnexpectedStatus {
            status: 500,
            context: "logout",
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("logout"));
    }

    #[test]
    fn test_storage_error_display() {
        let err = SwitchError::Storage("Failed to read accounts file".to_string());
        assert!(err.to_string().contains("Failed to read accounts file"));
    }

    #[test]
    fn test_config_error_display() {
        let err = SwitchError::Config("No account stored".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("No account stored"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify SwitchError is Send + Sync for async usage
        assert_send_sync::<SwitchError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SwitchError = json_err.into();
        match err {
            SwitchError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected SwitchError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SwitchError = io_err.into();
        match err {
            SwitchError::Storage(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected SwitchError::Storage"),
        }
    }

    #[test]
    fn test_source_is_none_for_protocol_errors() {
        use std::error::Error;
        let err = SwitchError::UnexpectedStatus {
            status: 403,
            context: "login",
        };
        assert!(err.source().is_none());
    }
}
